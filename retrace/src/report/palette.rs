use image::Rgba;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 52, 86, 255]);
pub const BAR: Rgba<u8> = Rgba([30, 82, 116, 255]);
pub const TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// chip colour for route numbers without a livery of their own
pub const DEFAULT_ROUTE: Rgba<u8> = Rgba([99, 130, 161, 255]);

const B_LINE: Rgba<u8> = Rgba([208, 65, 16, 255]);
const RAPID_BUS: Rgba<u8> = Rgba([0, 133, 34, 255]);
const NIGHT_BUS: Rgba<u8> = Rgba([0, 12, 66, 255]);

pub fn route_colour(route_number: &str) -> Rgba<u8> {
    match route_number {
        "99" | "099" => B_LINE,
        "R1" | "R2" | "R3" | "R4" | "R5" | "R6" => RAPID_BUS,
        "N8" | "N9" | "N10" | "N15" | "N17" | "N19" | "N20" | "N22" | "N24" | "N35" => NIGHT_BUS,
        _ => DEFAULT_ROUTE,
    }
}

#[cfg(test)]
mod test {
    use super::{route_colour, DEFAULT_ROUTE};
    use image::Rgba;

    #[test]
    fn test_route_colours() {
        assert_eq!(route_colour("099"), Rgba([208, 65, 16, 255]));
        assert_eq!(route_colour("R4"), Rgba([0, 133, 34, 255]));
        assert_eq!(route_colour("N8"), Rgba([0, 12, 66, 255]));
        assert_eq!(route_colour("N7"), DEFAULT_ROUTE);
        assert_eq!(route_colour("25"), DEFAULT_ROUTE);
    }
}

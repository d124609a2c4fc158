use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, StyledDrawable},
};
use glyph_matrix::{encode_commands, format_commands, Raster};

fn main() {
    let mut raster = Raster::new();
    let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    raster
        .bounding_box()
        .draw_styled(&style, &mut raster)
        .unwrap();

    Line::new(Point::new(0, 0), Point::new(7, 7))
        .draw_styled(&style, &mut raster)
        .unwrap();

    Circle::new(Point::new(2, 2), 4)
        .draw_styled(&PrimitiveStyle::with_fill(BinaryColor::On), &mut raster)
        .unwrap();

    let bitmap = raster.pack();
    println!("{:?}", bitmap.rows());
    println!("{bitmap}");
    println!("{}", format_commands(&encode_commands(&bitmap, 128, 128)));
}

use pictor::prelude::*;

#[test]
fn test_filled_rectangle() {
    let mut image = Image::new(8, 8, Rgba::black());
    image.draw(
        &Rectangle::new()
            .with_position(2, 2)
            .with_size(3, 3)
            .with_fill(Rgba::white()),
    );

    assert_eq!(*image.pixel(1, 1), Rgba::black());
    assert_eq!(*image.pixel(2, 2), Rgba::white());
    assert_eq!(*image.pixel(4, 4), Rgba::white());
    assert_eq!(*image.pixel(5, 5), Rgba::black());
}

#[test]
fn test_rectangle_border_positions() {
    let red = Rgba::new(255, 0, 0, 255);

    let mut image = Image::new(10, 10, Rgba::black());
    image.draw(
        &Rectangle::from_bounding_box(3, 3, 6, 6)
            .with_border(Border::new(red, 1).with_position(BorderPosition::Outset)),
    );
    assert_eq!(*image.pixel(2, 2), red);
    assert_eq!(*image.pixel(3, 3), Rgba::black());

    let mut image = Image::new(10, 10, Rgba::black());
    image.draw(
        &Rectangle::from_bounding_box(3, 3, 6, 6)
            .with_border(Border::new(red, 1).with_position(BorderPosition::Inset)),
    );
    assert_eq!(*image.pixel(2, 2), Rgba::black());
    assert_eq!(*image.pixel(3, 3), red);
    assert_eq!(*image.pixel(4, 4), Rgba::black());
}

#[test]
fn test_border_clips_at_edges() {
    // An outset border hanging off the canvas must not wrap or panic
    let mut image = Image::new(6, 6, Rgba::black());
    image.draw(
        &Rectangle::from_bounding_box(0, 0, 5, 5)
            .with_border(Border::new(Rgba::white(), 2).with_position(BorderPosition::Outset)),
    );

    assert_eq!(*image.pixel(3, 3), Rgba::black());
}

#[test]
fn test_ellipse() {
    let mut image = Image::new(11, 11, Rgba::black());
    image.draw(&Ellipse::circle(5, 5, 4).with_fill(Rgba::white()));

    assert_eq!(*image.pixel(5, 5), Rgba::white());
    assert_eq!(*image.pixel(5, 1), Rgba::white());
    assert_eq!(*image.pixel(1, 5), Rgba::white());
    assert_eq!(*image.pixel(1, 1), Rgba::black());
    assert_eq!(*image.pixel(0, 5), Rgba::black());
}

#[test]
fn test_ellipse_border_ring() {
    let red = Rgba::new(255, 0, 0, 255);
    let mut image = Image::new(21, 21, Rgba::black());
    image.draw(
        &Ellipse::circle(10, 10, 6)
            .with_border(Border::new(red, 2).with_position(BorderPosition::Inset)),
    );

    // On the rim but not in the middle
    assert_eq!(*image.pixel(10, 4), red);
    assert_eq!(*image.pixel(10, 10), Rgba::black());
}

#[test]
fn test_line() {
    let mut image = Image::new(5, 5, Rgba::black());
    image.draw(&Line::new((0, 4), (4, 0), Rgba::white()));

    assert_eq!(*image.pixel(0, 4), Rgba::white());
    assert_eq!(*image.pixel(2, 2), Rgba::white());
    assert_eq!(*image.pixel(4, 0), Rgba::white());
    assert_eq!(*image.pixel(0, 0), Rgba::black());
}

#[test]
fn test_thick_horizontal_line() {
    let mut image = Image::new(8, 8, Rgba::black());
    image.draw(&Line::new((0, 4), (7, 4), Rgba::white()).with_thickness(3));

    for x in 0..8 {
        assert_eq!(*image.pixel(x, 3), Rgba::white());
        assert_eq!(*image.pixel(x, 4), Rgba::white());
        assert_eq!(*image.pixel(x, 5), Rgba::white());
        assert_eq!(*image.pixel(x, 2), Rgba::black());
    }
}

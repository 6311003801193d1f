use pictor::prelude::*;

#[test]
fn test_hex_forms() -> pictor::Result<()> {
    assert_eq!("#fff".parse::<Rgba>()?, Rgba::white());
    assert_eq!("000000".parse::<Rgba>()?, Rgba::black());
    assert_eq!("#123456".parse::<Rgba>()?, Rgba::new(0x12, 0x34, 0x56, 255));

    // The alpha component leads
    assert_eq!("#80ff0000".parse::<Rgba>()?, Rgba::new(255, 0, 0, 0x80));
    assert_eq!("#0f00".parse::<Rgba>()?.a, 0);

    Ok(())
}

#[test]
fn test_functional_forms() -> pictor::Result<()> {
    assert_eq!("rgb(12, 34, 56)".parse::<Rgba>()?, Rgba::new(12, 34, 56, 255));
    assert_eq!("rgba(12,34,56,0.5)".parse::<Rgba>()?, Rgba::new(12, 34, 56, 128));
    assert_eq!("rgb (1, 2, 3)".parse::<Rgba>()?, Rgba::new(1, 2, 3, 255));

    // Arity is interchangeable between the two names
    assert_eq!("rgb(1, 2, 3, 1)".parse::<Rgba>()?.a, 255);
    assert_eq!("rgba(1, 2, 3)".parse::<Rgba>()?.a, 255);

    Ok(())
}

#[test]
fn test_rgb_discards_alpha() -> pictor::Result<()> {
    assert_eq!("#80ff0000".parse::<Rgb>()?, Rgb::new(255, 0, 0));
    assert_eq!("rgba(9, 8, 7, 0.25)".parse::<Rgb>()?, Rgb::new(9, 8, 7));

    Ok(())
}

#[test]
fn test_component_arrays() {
    assert_eq!(Rgba::from([1, 2, 3]), Rgba::new(1, 2, 3, 255));
    assert_eq!(Rgba::from([1, 2, 3, 4]), Rgba::new(1, 2, 3, 4));
    assert_eq!(Rgb::from((5, 6, 7)), Rgb::new(5, 6, 7));
    assert_eq!(Rgba::from((5, 6, 7, 8)), Rgba::new(5, 6, 7, 8));
}

#[test]
fn test_rejects_malformed() {
    assert!("#12345".parse::<Rgba>().is_err());
    assert!("rgb(300, 0, 0)".parse::<Rgba>().is_err());
    assert!("rgba(0, 0, 0, 2)".parse::<Rgba>().is_err());
    assert!("hsl(0, 0%, 0%)".parse::<Rgba>().is_err());
}

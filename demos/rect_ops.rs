use drect::{centered_drect, read_binary, write_binary, DPoint, DRect, FormatOptions, Rect};

fn main() -> drect::Result<()> {
    env_logger::init();

    let a = DRect::new(0.0, 0.0, 4.0, 3.0);
    let b = DRect::from_points(DPoint::new(2.0, 1.0), DPoint::new(6.5, 5.0));
    println!("a = {a}, b = {b}");
    println!("a + b = {}", a + b);
    println!("a & b = {}", a.intersect(&b));
    println!("a * 1.5 = {}", a * 1.5);
    let third = a.try_scaled_down(3.0)?;
    let fixed = FormatOptions::default().with_precision(3);
    println!("a / 3 = {}", third.display_with(fixed));
    println!("centered = {}", centered_drect(DPoint::new(0.0, 0.0), 4.0, 2.0));
    println!("rounded = {:?}", DRect::new(0.4, 0.6, 9.5, 9.49).to_rect());
    println!("widened = {}", DRect::from(Rect::new(1, 2, 3, 4)));

    let parsed: DRect = "[(1, 2) (3.5, 4)]".parse()?;
    println!("parsed = {parsed}, area = {}", parsed.area());
    if let Err(err) = "[(1, 2) (3.5 4)]".parse::<DRect>() {
        println!("rejected: {err}");
    }

    let mut bytes = Vec::new();
    write_binary(&b, &mut bytes)?;
    let decoded = read_binary(&mut bytes.as_slice())?;
    println!("binary round trip ({} bytes) = {decoded}", bytes.len());
    Ok(())
}

use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "icon-192.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgb_img = img.to_rgb8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    println!("Color type: {:?}", img.color());

    let corner = rgb_img.get_pixel(0, 0);
    println!("\nTop-left pixel: RGB [{}, {}, {}]", corner[0], corner[1], corner[2]);

    // The letter and its shadow sit in the central half of the icon
    let (x_start, x_end) = (width / 4, width * 3 / 4);
    let (y_start, y_end) = (height / 4, height * 3 / 4);

    let mut white_count = 0;
    let mut shadow_count = 0;
    for y in y_start..y_end {
        for x in x_start..x_end {
            let p = rgb_img.get_pixel(x, y);
            if p.0 == [255, 255, 255] {
                white_count += 1;
            } else if p.0.iter().all(|&c| c < 40) {
                shadow_count += 1;
            }
        }
    }

    println!("\nCentral area x={}..{}, y={}..{}:", x_start, x_end, y_start, y_end);
    println!("  {} white letter pixels", white_count);
    println!("  {} near-black shadow pixels", shadow_count);

    if white_count > 0 && shadow_count > 0 {
        println!("✓ Letter with drop shadow detected!");
    } else {
        println!("⚠ Letter or shadow may be missing");
    }
}

//! Deterministic identicon avatars. Every profile and company without an
//! uploaded image gets an abstract SVG derived purely from its display name:
//! same name, same picture, no storage and no network fetch.

use serde::Serialize;

/// Fixed fill palette. Color choice is `hash % PALETTE.len()`, so two names
/// collide on color with probability 1/15 but almost never on geometry.
pub const PALETTE: [&str; 15] = [
    "#F6C750", // golden yellow
    "#E63525", // deep red
    "#050D4C", // navy blue
    "#D4EBEE", // soft blue
    "#6B73FF", // purple
    "#16A085", // deep teal
    "#ED8936", // warm orange
    "#38B2AC", // teal
    "#9F7AEA", // lavender
    "#8E44AD", // rich purple
    "#F687B3", // dusty rose
    "#667EEA", // periwinkle
    "#81E6D9", // mint
    "#FBB6CE", // blush pink
    "#B794F6", // soft violet
];

const CANVAS_SIZE: u32 = 40;

/// 32-bit rolling hash of the name: `h = h * 31 + unit` over UTF-16 code
/// units with 32-bit wraparound, then the absolute value.
pub fn name_hash(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

fn get_digit(number: u64, ntn: u32) -> u64 {
    (number / 10u64.pow(ntn)) % 10
}

/// Project a hash product into `0..range`, negated when the salt digit is
/// even. No salt means the value stays positive. The input is 64-bit: the
/// products of a 32-bit hash exceed 32 bits and must not wrap.
fn get_unit(number: u64, range: u32, salt: Option<u32>) -> i32 {
    let value = (number % range as u64) as i32;
    match salt {
        Some(ntn) if get_digit(number, ntn) % 2 == 0 => -value,
        _ => value,
    }
}

/// Placement of one avatar shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeParams {
    pub color: &'static str,
    pub translate_x: i32,
    pub translate_y: i32,
    pub rotate: i32,
    pub scale: f32,
}

/// Derive the three shape placements for a name: background plus two
/// blurred overlay paths. Pure function of the input string.
pub fn generate(name: &str) -> [ShapeParams; 3] {
    let hash = name_hash(name);
    let range = PALETTE.len() as u32;

    std::array::from_fn(|i| {
        let i = i as u32;
        let n = hash as u64 * (i + 1) as u64;
        ShapeParams {
            color: PALETTE[(hash.wrapping_add(i) % range) as usize],
            translate_x: get_unit(n, CANVAS_SIZE / 10, Some(1)),
            translate_y: get_unit(n, CANVAS_SIZE / 10, Some(2)),
            rotate: get_unit(n, 360, Some(1)),
            scale: 1.2 + get_unit(n, CANVAS_SIZE / 20, None) as f32 / 10.0,
        }
    })
}

/// Render the identicon as a standalone SVG document.
pub fn to_svg(name: &str, size: u32) -> String {
    let shapes = generate(name);
    let half = size as f32 / 2.0;

    let path = |d: &str, shape: &ShapeParams, blend: &str| {
        format!(
            r#"<path filter="url(#blur)"{blend} d="{d}" fill="{}" transform="translate({} {}) rotate({} {half} {half}) scale({})"/>"#,
            shape.color, shape.translate_x, shape.translate_y, shape.rotate, shape.scale
        )
    };

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" fill="none" role="img" width="{size}" height="{size}">"#,
            r#"<mask id="mask" maskUnits="userSpaceOnUse" x="0" y="0" width="{size}" height="{size}">"#,
            r##"<rect width="{size}" height="{size}" rx="{rx}" fill="#FFFFFF"/>"##,
            "</mask>",
            r#"<g mask="url(#mask)">"#,
            r#"<rect width="{size}" height="{size}" fill="{background}"/>"#,
            "{first}",
            "{second}",
            "</g>",
            "<defs>",
            r#"<filter id="blur" filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">"#,
            r#"<feFlood flood-opacity="0" result="BackgroundImageFix"/>"#,
            r#"<feBlend in="SourceGraphic" in2="BackgroundImageFix" result="shape"/>"#,
            r#"<feGaussianBlur stdDeviation="7" result="effect1_foregroundBlur"/>"#,
            "</filter>",
            "</defs>",
            "</svg>"
        ),
        size = size,
        rx = size * 2,
        background = shapes[0].color,
        first = path(
            "M32.414 59.35L50.376 70.5H72.5v-71H33.728L26.5 13.381l19.057 27.08L32.414 59.35z",
            &shapes[1],
            "",
        ),
        second = path(
            "M22.216 24L0 46.75l14.108 38.129L78 86l-3.081-59.276-22.378 4.005 12.972 20.186-23.35 27.395L22.215 24z",
            &shapes[2],
            r#" style="mix-blend-mode:overlay""#,
        ),
    )
}

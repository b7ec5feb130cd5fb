//! Procedurally drawn textures.
//!
//! Each generator returns tightly packed RGBA8 rows, `width * height * 4`
//! bytes, top row first.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

type Rgba = [u8; 4];

const CLEAR: Rgba = [0, 0, 0, 0];

const PLAYER_BODY: Rgba = [70, 200, 255, 255];
const PLAYER_TRIM: Rgba = [20, 60, 110, 255];
const PLAYER_VISOR: Rgba = [240, 250, 255, 255];

const ENEMY_BODY: Rgba = [230, 70, 70, 255];
const ENEMY_EYE: Rgba = [255, 230, 120, 255];

const BATTERY_SHELL: Rgba = [60, 220, 110, 255];
const BATTERY_CAP: Rgba = [200, 200, 210, 255];
const BATTERY_BOLT: Rgba = [255, 240, 90, 255];

const PLATFORM_TOP: Rgba = [150, 230, 170, 255];
const PLATFORM_BODY: Rgba = [55, 75, 95, 255];
const PLATFORM_SHADE: Rgba = [35, 48, 62, 255];

pub const PLAYER_TEXTURE_SIZE: (u32, u32) = (12, 16);
pub const ENEMY_TEXTURE_SIZE: (u32, u32) = (14, 12);
pub const BATTERY_TEXTURE_SIZE: (u32, u32) = (8, 12);
/// Platforms stretch this to their size, so it only varies by row
pub const PLATFORM_TEXTURE_SIZE: (u32, u32) = (1, 10);
pub const PARTICLE_TEXTURE_SIZE: (u32, u32) = (4, 4);

/// Handles to every generated texture
#[derive(Resource, Debug, Clone, Default)]
pub struct GeneratedTextures {
    pub player: Handle<Image>,
    pub enemy: Handle<Image>,
    pub battery: Handle<Image>,
    pub platform: Handle<Image>,
    pub particle: Handle<Image>,
}

fn canvas(width: u32, height: u32, paint: impl Fn(u32, u32) -> Rgba) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&paint(x, y));
        }
    }
    pixels
}

/// Suited runner with a visor strip near the top.
pub fn player_pixels(width: u32, height: u32) -> Vec<u8> {
    canvas(width, height, |x, y| {
        let edge = x == 0 || x + 1 == width || y == 0 || y + 1 == height;
        let visor = y >= height / 5 && y < height / 5 + 2 && x >= width / 3 && x + 1 < width;
        if edge {
            PLAYER_TRIM
        } else if visor {
            PLAYER_VISOR
        } else {
            PLAYER_BODY
        }
    })
}

/// Rounded blob with two eyes.
pub fn enemy_pixels(width: u32, height: u32) -> Vec<u8> {
    canvas(width, height, |x, y| {
        let corner = (x == 0 || x + 1 == width) && (y == 0 || y + 1 == height);
        let eye_row = y == height / 3;
        let eye = eye_row && (x == width / 3 || x == width - 1 - width / 3);
        if corner {
            CLEAR
        } else if eye {
            ENEMY_EYE
        } else {
            ENEMY_BODY
        }
    })
}

/// Cell with a terminal cap and a bolt down the middle.
pub fn battery_pixels(width: u32, height: u32) -> Vec<u8> {
    let cap_height = (height / 6).max(1);
    canvas(width, height, |x, y| {
        let mid = width / 2;
        if y < cap_height {
            if x + 1 >= mid && x <= mid {
                BATTERY_CAP
            } else {
                CLEAR
            }
        } else if x.abs_diff(mid) <= 1 && y > cap_height + 1 && y + 2 < height {
            BATTERY_BOLT
        } else {
            BATTERY_SHELL
        }
    })
}

/// Lit top edge over a darker body.
pub fn platform_pixels(width: u32, height: u32) -> Vec<u8> {
    canvas(width, height, |_, y| {
        if y == 0 {
            PLATFORM_TOP
        } else if y + 2 >= height {
            PLATFORM_SHADE
        } else {
            PLATFORM_BODY
        }
    })
}

/// Plain white square, tinted per burst.
pub fn particle_pixels(width: u32, height: u32) -> Vec<u8> {
    canvas(width, height, |_, _| [255, 255, 255, 255])
}

fn to_image(width: u32, height: u32, pixels: Vec<u8>) -> Image {
    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::nearest();
    image
}

pub(crate) fn generate_textures(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let (pw, ph) = PLAYER_TEXTURE_SIZE;
    let (ew, eh) = ENEMY_TEXTURE_SIZE;
    let (bw, bh) = BATTERY_TEXTURE_SIZE;
    let (lw, lh) = PLATFORM_TEXTURE_SIZE;
    let (qw, qh) = PARTICLE_TEXTURE_SIZE;

    commands.insert_resource(GeneratedTextures {
        player: images.add(to_image(pw, ph, player_pixels(pw, ph))),
        enemy: images.add(to_image(ew, eh, enemy_pixels(ew, eh))),
        battery: images.add(to_image(bw, bh, battery_pixels(bw, bh))),
        platform: images.add(to_image(lw, lh, platform_pixels(lw, lh))),
        particle: images.add(to_image(qw, qh, particle_pixels(qw, qh))),
    });
    info!("Generated 5 procedural textures");
}

use kernel_framebuffer::{Color, Framebuffer, Geometry};

const GUARD: u8 = 0xCC;
const GUARD_LEN: usize = 64;

/// A framebuffer span surrounded by guard bytes on both sides.
struct Guarded {
    bytes: Vec<u8>,
    geometry: Geometry,
}

impl Guarded {
    fn new(width: u32, height: u32, pitch: usize) -> Self {
        let geometry = Geometry::new(width, height, pitch).unwrap();
        let bytes = vec![GUARD; GUARD_LEN + geometry.span() + GUARD_LEN];
        Self { bytes, geometry }
    }

    fn framebuffer(&mut self) -> Framebuffer<'_> {
        let span = self.geometry.span();
        Framebuffer::from_slice(&mut self.bytes[GUARD_LEN..GUARD_LEN + span], self.geometry)
            .unwrap()
    }

    fn guards_intact(&self) -> bool {
        let tail = GUARD_LEN + self.geometry.span();
        self.bytes[..GUARD_LEN].iter().all(|&b| b == GUARD)
            && self.bytes[tail..].iter().all(|&b| b == GUARD)
    }

    fn modified(&self) -> usize {
        self.bytes.iter().filter(|&&b| b != GUARD).count()
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let offset = GUARD_LEN + y as usize * self.geometry.pitch() + x as usize * 4;
        Color::from_cell(self.bytes[offset..offset + 4].try_into().unwrap())
    }
}

#[test]
fn plot_writes_iff_in_bounds() {
    for (w, h) in [(1, 1), (2, 3), (7, 5), (16, 16)] {
        for y in 0..h + 3 {
            for x in 0..w + 3 {
                let mut g = Guarded::new(w, h, w as usize * 4);
                g.framebuffer().plot(x, y, Color::from_u32(0x0001_0203));

                let expected = if x < w && y < h { 4 } else { 0 };
                assert_eq!(g.modified(), expected, "{w}x{h} at ({x}, {y})");
                assert!(g.guards_intact(), "{w}x{h} at ({x}, {y})");
            }
        }
    }
}

#[test]
fn extreme_coordinates_are_ignored() {
    let mut g = Guarded::new(8, 8, 32);
    {
        let mut fb = g.framebuffer();
        fb.plot(u32::MAX, 0, Color::WHITE);
        fb.plot(0, u32::MAX, Color::WHITE);
        fb.plot(u32::MAX, u32::MAX, Color::WHITE);
        fb.fill_rect(u32::MAX - 1, u32::MAX - 1, 10, 10, Color::WHITE);
    }
    assert_eq!(g.modified(), 0);
}

#[test]
fn padded_scanlines_keep_their_padding() {
    // 10 visible pixels (40 bytes) in a 64 byte scanline.
    let (width, height, pitch) = (10u32, 4u32, 64usize);
    let mut g = Guarded::new(width, height, pitch);
    {
        let mut fb = g.framebuffer();
        for y in 0..height {
            for x in 0..width {
                fb.plot(x, y, Color::WHITE);
            }
        }
    }

    assert!(g.guards_intact());
    for y in 0..height as usize {
        let row = GUARD_LEN + y * pitch;
        assert!(
            g.bytes[row..row + 40]
                .chunks(4)
                .all(|c| c == &Color::WHITE.to_cell()[..]),
            "row {y} visible part"
        );
        if y + 1 < height as usize {
            assert!(
                g.bytes[row + 40..row + pitch].iter().all(|&b| b == GUARD),
                "row {y} padding"
            );
        }
    }
}

#[test]
fn single_pixel_stays_in_its_scanline() {
    let mut g = Guarded::new(10, 3, 64);
    g.framebuffer().plot(9, 1, Color::RED);

    assert_eq!(g.pixel(9, 1), Color::RED);
    assert_eq!(g.modified(), 4);
    let start = GUARD_LEN + 64 + 36;
    assert!(g.bytes[..start].iter().all(|&b| b == GUARD));
    assert!(g.bytes[start + 4..].iter().all(|&b| b == GUARD));
}

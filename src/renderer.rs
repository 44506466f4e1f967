use crate::grids::wall_grid::WallGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Wall,
    Open,
}

impl Pixel {
    pub fn is_wall(self) -> bool {
        self == Pixel::Wall
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Pixel::Wall => [0, 0, 0],
            Pixel::Open => [255, 255, 255],
        }
    }
}

/// Luma value, black walls on white.
impl From<Pixel> for u8 {
    fn from(pixel: Pixel) -> Self {
        match pixel {
            Pixel::Wall => 0,
            Pixel::Open => 255,
        }
    }
}

/// Row-major monochrome image of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::Open; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    #[inline]
    fn set_wall(&mut self, x: usize, y: usize) {
        self.pixels[y * self.width + x] = Pixel::Wall;
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Pixel> {
        self.pixels.chunks(self.width)
    }
}

/// Draws `grid` at one pixel per cell interior and one per wall, giving a
/// `(2 * width + 1) x (2 * height + 1)` image. The extra top row and left
/// column hold the outer border, the right and bottom border come from the
/// walls the last column and row still own.
pub fn render(grid: &WallGrid) -> PixelBuffer {
    let (width, height) = (grid.width(), grid.height());
    let mut buffer = PixelBuffer::open(2 * width + 1, 2 * height + 1);

    buffer.set_wall(0, 0);
    for x in 0..width {
        buffer.set_wall(2 * x + 1, 0);
        buffer.set_wall(2 * x + 2, 0);
    }
    for y in 0..height {
        buffer.set_wall(0, 2 * y + 1);
        buffer.set_wall(0, 2 * y + 2);
    }

    for y in 0..height {
        for x in 0..width {
            buffer.set_wall(2 * x + 2, 2 * y + 2);
            if grid.has_right_wall((x, y)) {
                buffer.set_wall(2 * x + 2, 2 * y + 1);
            }
            if grid.has_bottom_wall((x, y)) {
                buffer.set_wall(2 * x + 1, 2 * y + 2);
            }
        }
    }

    buffer
}

#[cfg(test)]
mod test_renderer {
    use super::*;
    use crate::generators::backtracker::generate;
    use crate::grids::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn walls(buffer: &PixelBuffer) -> Vec<Vec<bool>> {
        buffer
            .rows()
            .map(|row| row.iter().map(|p| p.is_wall()).collect())
            .collect()
    }

    #[test]
    fn single_cell_is_boxed_in() {
        let mut grid = WallGrid::with_dims(1, 1).unwrap();
        generate(&mut grid, &mut StdRng::seed_from_u64(1));
        let buffer = render(&grid);

        assert_eq!((buffer.width(), buffer.height()), (3, 3));
        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x, y) == (1, 1) {
                    Pixel::Open
                } else {
                    Pixel::Wall
                };
                assert_eq!(buffer.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn two_cells_share_an_open_wall() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();
        generate(&mut grid, &mut StdRng::seed_from_u64(1));
        let buffer = render(&grid);

        let x = true;
        let o = false;
        assert_eq!(
            walls(&buffer),
            vec![
                vec![x, x, x, x, x],
                vec![x, o, o, o, x],
                vec![x, x, x, x, x],
            ]
        );
    }

    #[test]
    fn untouched_grid_is_a_lattice() {
        let grid = WallGrid::with_dims(3, 2).unwrap();
        let buffer = render(&grid);

        assert_eq!((buffer.width(), buffer.height()), (7, 5));
        for y in 0..5 {
            for x in 0..7 {
                let interior = x % 2 == 1 && y % 2 == 1;
                assert_eq!(buffer.get(x, y).is_wall(), !interior);
            }
        }
    }

    #[test]
    fn wall_pixels_follow_wall_bits() {
        let mut grid = WallGrid::with_dims(9, 7).unwrap();
        generate(&mut grid, &mut StdRng::seed_from_u64(42));
        let buffer = render(&grid);

        for y in 0..7 {
            for x in 0..9 {
                assert_eq!(buffer.get(2 * x + 1, 2 * y + 1), Pixel::Open);
                assert_eq!(buffer.get(2 * x + 2, 2 * y + 2), Pixel::Wall);
                assert_eq!(
                    buffer.get(2 * x + 2, 2 * y + 1).is_wall(),
                    !grid.is_open((x, y), Direction::Right)
                );
                assert_eq!(
                    buffer.get(2 * x + 1, 2 * y + 2).is_wall(),
                    !grid.is_open((x, y), Direction::Bottom)
                );
            }
        }
        // outer border stays closed
        for x in 0..buffer.width() {
            assert!(buffer.get(x, 0).is_wall());
            assert!(buffer.get(x, buffer.height() - 1).is_wall());
        }
        for y in 0..buffer.height() {
            assert!(buffer.get(0, y).is_wall());
            assert!(buffer.get(buffer.width() - 1, y).is_wall());
        }
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut grid = WallGrid::with_dims(12, 5).unwrap();
        generate(&mut grid, &mut StdRng::seed_from_u64(3));

        assert_eq!(render(&grid), render(&grid));
    }

    #[test]
    fn pixel_colors() {
        assert_eq!(u8::from(Pixel::Wall), 0);
        assert_eq!(u8::from(Pixel::Open), 255);
        assert_eq!(Pixel::Wall.rgb(), [0, 0, 0]);
        assert_eq!(Pixel::Open.rgb(), [255, 255, 255]);
    }
}

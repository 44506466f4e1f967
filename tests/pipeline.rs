use maze_carver::{create_maze, encoder, generate, render, Direction, Error, Pixel};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn zero_width_is_rejected() {
    match create_maze(0, 5) {
        Err(Error::InvalidDimensions { width, height }) => assert_eq!((width, height), (0, 5)),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("a 0x5 maze must not be created"),
    }
}

#[test]
fn carved_maze_renders_to_expected_size() {
    let mut grid = create_maze(23, 11).unwrap();
    generate(&mut grid, &mut StdRng::seed_from_u64(5));
    let buffer = render(&grid);

    assert_eq!(grid.visited_count(), 23 * 11);
    assert_eq!(grid.carved_passages(), 23 * 11 - 1);
    assert_eq!((buffer.width(), buffer.height()), (47, 23));

    // every open wall pixel sits between two cells joined by a passage
    let open_walls = (0..buffer.height())
        .flat_map(|y| (0..buffer.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| (x + y) % 2 == 1 && buffer.get(x, y) == Pixel::Open)
        .count();
    assert_eq!(open_walls, grid.carved_passages());
}

#[test]
fn entrance_cell_connects_somewhere() {
    let mut grid = create_maze(5, 5).unwrap();
    generate(&mut grid, &mut StdRng::seed_from_u64(8));

    assert!(Direction::ALL.iter().any(|&dir| grid.is_open((0, 0), dir)));
}

#[test]
fn writes_png_and_bmp() {
    let mut grid = create_maze(6, 4).unwrap();
    generate(&mut grid, &mut StdRng::seed_from_u64(21));
    let buffer = render(&grid);

    let dir = std::env::temp_dir();
    for name in &["maze-carver-pipeline.png", "maze-carver-pipeline.bmp"] {
        let path = dir.join(name);
        encoder::save(&buffer, &path, 3).unwrap();

        let written = image::open(&path).unwrap().to_luma8();
        assert_eq!(written.dimensions(), (13 * 3, 9 * 3));
        assert_eq!(written, encoder::to_image(&buffer, 3).unwrap());
        std::fs::remove_file(&path).unwrap();
    }
}

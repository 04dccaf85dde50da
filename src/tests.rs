use crate::{generate, render, Error, Rng, HEIGHT, SYMBOLS, WIDTH};

#[test]
fn default_dimensions() {
    let rng = Rng::with_seed(1);
    let grid = generate(HEIGHT, WIDTH, &SYMBOLS, &rng).unwrap();
    assert_eq!(grid.height(), HEIGHT);
    assert_eq!(grid.width(), WIDTH);

    let text = render(&grid);
    assert_eq!(text.lines().count(), HEIGHT);
    for line in text.lines() {
        assert_eq!(line.chars().count(), WIDTH);
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn cells_come_from_the_alphabet() {
    let rng = Rng::with_seed(2);
    let grid = generate(HEIGHT, WIDTH, &SYMBOLS, &rng).unwrap();
    for row in grid.rows() {
        for &cell in row {
            assert!(SYMBOLS.contains(&cell), "unexpected symbol {cell:?}");
        }
    }

    let text = render(&grid);
    for c in text.chars() {
        assert!(c == '\n' || SYMBOLS.contains(&c));
    }
}

#[test]
fn symbol_frequencies_are_uniform() {
    // 200 * 500 = 100_000 cells; each symbol should land within two percentage
    // points of the expected 1/8.
    let rng = Rng::with_seed(0xDEC0DE);
    let grid = generate(200, 500, &SYMBOLS, &rng).unwrap();

    let mut counts = [0usize; SYMBOLS.len()];
    for row in grid.rows() {
        for &cell in row {
            let index = SYMBOLS.iter().position(|&s| s == cell).unwrap();
            counts[index] += 1;
        }
    }

    let total = (200 * 500) as f64;
    for (symbol, &count) in SYMBOLS.iter().zip(&counts) {
        let freq = count as f64 / total;
        assert!(
            (freq - 0.125).abs() < 0.02,
            "symbol {symbol:?} frequency {freq} out of tolerance"
        );
    }
}

#[test]
fn equal_seeds_reproduce_the_grid() {
    let a = generate(HEIGHT, WIDTH, &SYMBOLS, &Rng::with_seed(99)).unwrap();
    let b = generate(HEIGHT, WIDTH, &SYMBOLS, &Rng::with_seed(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn distinct_seeds_disagree() {
    let a = generate(HEIGHT, WIDTH, &SYMBOLS, &Rng::with_seed(1)).unwrap();
    let b = generate(HEIGHT, WIDTH, &SYMBOLS, &Rng::with_seed(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn reseed_restarts_the_sequence() {
    let rng = Rng::with_seed(7);
    let first = rng.bounded(0, u64::MAX);
    rng.reseed(7);
    assert_eq!(rng.bounded(0, u64::MAX), first);
}

#[test]
fn single_symbol_alphabet_is_constant() {
    let rng = Rng::with_seed(3);
    let grid = generate(4, 4, &['#'], &rng).unwrap();
    assert!(grid.rows().all(|row| row.iter().all(|&c| c == '#')));
}

#[test]
fn unit_grid_is_one_symbol_and_a_newline() {
    let rng = Rng::with_seed(4);
    let grid = generate(1, 1, &SYMBOLS, &rng).unwrap();
    let text = render(&grid);
    assert_eq!(text.chars().count(), 2);
    assert!(text.ends_with('\n'));
    assert!(SYMBOLS.contains(&text.chars().next().unwrap()));
}

#[test]
fn rejects_degenerate_arguments() {
    let rng = Rng::with_seed(5);
    assert!(matches!(
        generate(0, WIDTH, &SYMBOLS, &rng),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        generate(HEIGHT, 0, &SYMBOLS, &rng),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        generate(HEIGHT, WIDTH, &[], &rng),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        generate(usize::MAX, 2, &SYMBOLS, &rng),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn bounded_stays_in_range_and_covers_it() {
    let rng = Rng::with_seed(6);
    let mut seen = [false; 8];
    for _ in 0..1_000 {
        let value = rng.bounded(10, 18);
        assert!((10..18).contains(&value));
        seen[(value - 10) as usize] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn grid_get_respects_bounds() {
    let rng = Rng::with_seed(8);
    let grid = generate(2, 3, &SYMBOLS, &rng).unwrap();
    assert!(grid.get(1, 2).is_some());
    assert!(grid.get(2, 0).is_none());
    assert!(grid.get(0, 3).is_none());
}

#[test]
fn time_seeding_is_available() {
    // Each run should seed without touching a test hook; the clock being
    // readable is all the binary relies on.
    assert!(Rng::new().is_ok());
}

#[cfg(feature = "rand")]
#[test]
fn rand_core() {
    use rand::{RngCore, SeedableRng};

    let mut rng = &Rng::from_seed([0; 8]);
    let mut buffer = [0; 32];
    rng.fill_bytes(&mut buffer);
    assert_ne!(buffer, [0; 32]);
}

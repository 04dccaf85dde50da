use std::{
    io::{self, Write},
    process::ExitCode,
};

use glyphgrid::{generate, render, Error, Rng, HEIGHT, SYMBOLS, WIDTH};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("glyphgrid: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let rng = Rng::new()?;
    let grid = generate(HEIGHT, WIDTH, &SYMBOLS, &rng)?;
    let mut output = io::stdout().lock();
    output.write_all(render(&grid).as_bytes())?;
    output.flush()?;
    Ok(())
}

use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter};

use simplelog::{LevelFilter, WriteLogger};
use structopt::StructOpt;

use perfdata::cliopt::CliOpt;
use perfdata::error::Error;
use perfdata::input::{LineReader, RecordReader};
use perfdata::output::{LineWriter, PointSink};
use perfdata::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    // stdout carries the points.
    WriteLogger::init(
        if opt.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        simplelog::Config::default(),
        io::stderr(),
    )?;

    let input: Box<dyn BufRead> = match &opt.input {
        Some(path) => Box::new(BufReader::new(fs::File::open(path).map_err(|e| {
            Error::from((format!("failed opening {}", path.display()), e))
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let sink = PointSink::new(
        Box::new(LineWriter::new(BufWriter::new(io::stdout()))),
        opt.encode.encoder(),
    );

    let mut runner = Runner::new(
        RecordReader::new(Box::new(LineReader::new(input))),
        Box::new(sink),
    );
    runner.run()?;

    Ok(())
}

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

/// Read the whole input, from `infile` or stdin if not given.
pub(crate) fn read_input(infile: Option<&Path>) -> anyhow::Result<String> {
    let mut reader: Box<dyn Read> = if let Some(infile) = infile {
        Box::new(BufReader::new(File::open(infile)?))
    } else {
        Box::new(BufReader::new(std::io::stdin()))
    };
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Open `outfile` for writing, or stdout if not given.
pub(crate) fn open_output(outfile: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(if let Some(outfile) = outfile {
        Box::new(File::create(outfile)?)
    } else {
        Box::new(std::io::stdout())
    })
}

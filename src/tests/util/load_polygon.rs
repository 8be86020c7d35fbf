use std::{error, fs, io};
use std::io::BufRead;

/// Load a polygon from a file with one `x,y` vertex per line. Blank lines are skipped.
pub fn load_polygon(path: &str) -> Result<Vec<[f64; 2]>, Box<dyn error::Error>> {
    let mut output = Vec::new();
    let f = fs::File::open(path)?;
    for line in io::BufReader::new(f).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (x, y) = line.split_once(',').ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid vertex line '{}'", line)))?;
        output.push([x.trim().parse::<f64>()?, y.trim().parse::<f64>()?]);
    }

    Ok(output)
}

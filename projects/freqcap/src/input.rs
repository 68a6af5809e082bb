use super::Error;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

/// Read each line as a text value, keeping everything but the line terminator.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>, Error> {
    Ok(BufReader::new(reader).lines().collect::<Result<_, _>>()?)
}

/// Read one value per line, parsing the trimmed line.
pub fn read_values<T: FromStr, R: Read>(reader: R) -> Result<Vec<T>, Error> {
    let mut values = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let value = line
            .trim()
            .parse::<T>()
            .map_err(|_| Error::InvalidValue {
                line: i + 1,
                value: line.clone(),
            })?;

        values.push(value);
    }

    Ok(values)
}

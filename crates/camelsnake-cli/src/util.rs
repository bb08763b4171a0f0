use std::io::{self, BufRead};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Expand the WORD arguments into the list of identifiers to convert.
///
/// No words means stdin. A `-` word splices in the lines of stdin; stdin is
/// read at most once.
pub fn load_inputs(words: &[String]) -> Result<Vec<String>, InputError> {
    expand_words(words, || read_lines(io::stdin().lock()))
}

pub fn expand_words(
    words: &[String],
    mut stdin: impl FnMut() -> io::Result<Vec<String>>,
) -> Result<Vec<String>, InputError> {
    if words.is_empty() {
        return Ok(stdin()?);
    }

    let mut inputs = Vec::with_capacity(words.len());
    let mut stdin_read = false;
    for word in words {
        if word != "-" {
            inputs.push(word.clone());
        } else if !stdin_read {
            inputs.extend(stdin()?);
            stdin_read = true;
        }
    }
    Ok(inputs)
}

/// One entry per line, line endings stripped.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

use camelsnake_core::Case;

/// Resolve a case name, returning an error message if unknown.
pub fn resolve_case_required(name: &str) -> Result<Case, String> {
    name.parse::<Case>().map_err(|e| e.to_string())
}

/// Resolve a case name with user-friendly error handling.
/// Exits with error message if the name is unknown.
pub fn require_case(name: &str) -> Case {
    match resolve_case_required(name) {
        Ok(case) => case,
        Err(msg) => {
            eprintln!("error: {}", msg);
            if let Some(suggestion) = suggest_case(name) {
                eprintln!();
                eprintln!("Did you mean '{}'?", suggestion.key());
            }
            eprintln!();
            eprintln!("Run 'camelsnake cases' for the full list.");
            std::process::exit(1);
        }
    }
}

/// Closest preset by edit distance on the normalized name.
pub fn suggest_case(input: &str) -> Option<Case> {
    let key = Case::normalize_name(input);
    Case::ALL
        .into_iter()
        .filter(|case| edit_distance(case.key(), &key) <= 2)
        .min_by_key(|case| edit_distance(case.key(), &key))
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[b.len()]
}

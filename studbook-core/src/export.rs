use crate::models::RatedBreed;

/// CSV column: header text plus the accessor producing the cell value.
pub struct CsvColumn {
    pub header: &'static str,
    pub value: fn(&RatedBreed) -> String,
}

fn num(n: f64) -> String {
    // f64 Display drops the fraction for whole numbers: 110 not 110.0.
    format!("{}", n)
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Export column set, in order.
pub const CSV_COLUMNS: &[CsvColumn] = &[
    CsvColumn { header: "Name", value: |b| b.breed.name.clone() },
    CsvColumn { header: "Origin", value: |b| b.breed.origin.clone() },
    CsvColumn { header: "Min Wt (lbs)", value: |b| num(b.breed.weight_lbs.min) },
    CsvColumn { header: "Max Wt (lbs)", value: |b| num(b.breed.weight_lbs.max) },
    CsvColumn { header: "Min Ht (in)", value: |b| num(b.breed.height_in.min) },
    CsvColumn { header: "Max Ht (in)", value: |b| num(b.breed.height_in.max) },
    CsvColumn { header: "Min Life (yrs)", value: |b| num(b.breed.lifespan_yrs.min) },
    CsvColumn { header: "Max Life (yrs)", value: |b| num(b.breed.lifespan_yrs.max) },
    CsvColumn { header: "Coat", value: |b| b.breed.coat.clone() },
    CsvColumn { header: "Purpose", value: |b| b.breed.purpose.join("; ") },
    CsvColumn { header: "Exercise", value: |b| b.breed.exercise.to_string() },
    CsvColumn { header: "Grooming", value: |b| b.breed.grooming.to_string() },
    CsvColumn { header: "Shedding", value: |b| b.breed.shedding.to_string() },
    CsvColumn { header: "Trainability", value: |b| b.breed.trainability.to_string() },
    CsvColumn { header: "Temperament", value: |b| b.breed.temperament.join("; ") },
    CsvColumn { header: "Kids", value: |b| yes_no(b.breed.good_with_kids) },
    CsvColumn { header: "Dogs", value: |b| yes_no(b.breed.good_with_dogs) },
    CsvColumn {
        header: "Service Score",
        value: |b| b.breed.service_dog_score.map(|s| s.to_string()).unwrap_or_default(),
    },
    CsvColumn { header: "Health Notes", value: |b| b.breed.health_notes.clone() },
];

/// Quote a cell: wrapped in double quotes, embedded quotes doubled.
pub fn csv_escape(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize rows to CSV text: bare header line, then one quoted line per
/// row, joined with `\n`. Rows come out exactly as handed in; callers filter
/// and sort beforehand.
pub fn to_csv(rows: &[RatedBreed]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        CSV_COLUMNS
            .iter()
            .map(|c| c.header)
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        let cells: Vec<String> = CSV_COLUMNS
            .iter()
            .map(|c| csv_escape(&(c.value)(row)))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

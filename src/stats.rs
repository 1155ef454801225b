use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use csv::StringRecord;
use regex::Regex;

use crate::table::{self, column_index, field};

// Best-effort numeric coercion for free-text fields like "(AZN): 350" or
// "34 il": the first embedded digit run wins, anything else is missing.
// Deliberately lossy; the source fields carry currency annotations and
// descriptive suffixes.
pub struct NumberParser {
    digits: Regex,
}

impl NumberParser {
    pub fn new() -> Self {
        NumberParser {
            digits: Regex::new(r"\d+").unwrap(),
        }
    }

    pub fn parse(&self, text: &str) -> Option<i64> {
        self.digits.find(text).and_then(|m| m.as_str().parse().ok())
    }
}

impl Default for NumberParser {
    fn default() -> Self {
        NumberParser::new()
    }
}

// Frequency counts of non-empty values, most common first; ties break
// alphabetically for stable output.
pub fn count_frequencies<I: IntoIterator<Item = String>>(values: I) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

pub fn value_counts(rows: &[StringRecord], idx: usize) -> Vec<(String, usize)> {
    count_frequencies(rows.iter().map(|row| field(row, idx).to_string()))
}

pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

pub fn median(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn print_counts(title: &str, counts: &[(String, usize)], top: Option<usize>) {
    println!("\n{}:", title);
    let limit = top.unwrap_or(counts.len());
    for (value, count) in counts.iter().take(limit) {
        println!("  {}: {}", value, count);
    }
}

// Read-only descriptive report over a flat file; writes nothing back.
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn Error>> {
    let (headers, rows) = table::read_table(path)?;

    banner("DATASET OVERVIEW");
    println!("Total Records: {}", rows.len());
    println!("Columns: {:?}", headers.iter().collect::<Vec<_>>());

    let parser = NumberParser::new();
    let salary_idx = column_index(&headers, "min_salary")?;
    let age_idx = column_index(&headers, "age")?;

    banner("BASIC STATISTICS");
    let salaries: Vec<i64> = rows
        .iter()
        .filter_map(|r| parser.parse(field(r, salary_idx)))
        .collect();
    println!("\nSalary Statistics:");
    if let (Some(min), Some(max)) = (salaries.iter().min(), salaries.iter().max()) {
        println!("Min Salary Range: {} - {} AZN", min, max);
        println!("Average Min Salary: {:.2} AZN", mean(&salaries));
        println!("Median Min Salary: {:.2} AZN", median(&salaries));
    } else {
        println!("No numeric salary values found");
    }

    let ages: Vec<i64> = rows
        .iter()
        .filter_map(|r| parser.parse(field(r, age_idx)))
        .collect();
    println!("\nAge Statistics:");
    if let (Some(min), Some(max)) = (ages.iter().min(), ages.iter().max()) {
        println!("Age Range: {} - {} years", min, max);
        println!("Average Age: {:.2} years", mean(&ages));
    } else {
        println!("No numeric age values found");
    }

    banner("DISTRIBUTION ANALYSIS");
    let gender_idx = column_index(&headers, "gender")?;
    let marital_idx = column_index(&headers, "marital_status")?;
    let city_idx = column_index(&headers, "city")?;
    let category_idx = column_index(&headers, "category")?;
    let position_idx = column_index(&headers, "position")?;

    print_counts("Gender Distribution", &value_counts(&rows, gender_idx), None);
    print_counts(
        "Marital Status Distribution",
        &value_counts(&rows, marital_idx),
        None,
    );
    print_counts("Top 10 Cities", &value_counts(&rows, city_idx), Some(10));
    print_counts(
        "Top 10 Categories",
        &value_counts(&rows, category_idx),
        Some(10),
    );
    print_counts(
        "Top 10 Positions",
        &value_counts(&rows, position_idx),
        Some(10),
    );

    banner("NULL/MISSING VALUES");
    for (idx, name) in headers.iter().enumerate() {
        let missing = rows
            .iter()
            .filter(|r| field(r, idx).trim().is_empty())
            .count();
        println!("{}: {}", name, missing);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_digit_run() {
        let parser = NumberParser::new();
        assert_eq!(parser.parse("(AZN): 350"), Some(350));
        assert_eq!(parser.parse("34 il"), Some(34));
        assert_eq!(parser.parse("min 1200 AZN, razılaşma ilə"), Some(1200));
    }

    #[test]
    fn missing_or_non_numeric_is_none() {
        let parser = NumberParser::new();
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("razılaşma ilə"), None);
    }

    #[test]
    fn value_counts_skips_empty_and_sorts_desc() {
        let rows = vec![
            StringRecord::from(vec!["Kişi"]),
            StringRecord::from(vec!["Qadın"]),
            StringRecord::from(vec!["Kişi"]),
            StringRecord::from(vec![""]),
        ];
        let counts = value_counts(&rows, 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], ("Kişi".to_string(), 2));
        assert_eq!(counts[1], ("Qadın".to_string(), 1));
    }

    #[test]
    fn mean_and_median() {
        assert_eq!(mean(&[1, 2, 3]), 2.0);
        assert_eq!(median(&[3, 1, 2]), 2.0);
        assert_eq!(median(&[4, 1, 2, 3]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn analyze_runs_over_a_small_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(
            &path,
            "id,url,name,city,phone,email,age,gender,marital_status,category,position,min_salary,education,experience,skills\n\
             1,u,Əli,Bakı,x,a@b.az,34 il,Kişi,Subay,Mühasibat,Baş mühasib,(AZN): 1500,e,w,s\n\
             2,u,Aygün,Gəncə,y,,27,Qadın,Ailəli,Mühasibat,Mühasib,,e,w,s\n",
        )
        .unwrap();
        analyze(&path).unwrap();
    }
}

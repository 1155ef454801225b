use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::stats::{count_frequencies, mean, median, NumberParser};
use crate::table::{self, column_index, field};

// Shared palette for all business charts.
const STEEL_BLUE: RGBColor = RGBColor(0x2e, 0x86, 0xab);
const PLUM: RGBColor = RGBColor(0xa2, 0x3b, 0x72);
const AMBER: RGBColor = RGBColor(0xf1, 0x8f, 0x01);
const BRICK: RGBColor = RGBColor(0xc7, 0x3e, 0x1d);
const OLIVE: RGBColor = RGBColor(0x6a, 0x99, 0x4e);

const SALARY_BINS: [i64; 8] = [0, 300, 500, 700, 1000, 1500, 2000, 3600];
const SALARY_LABELS: [&str; 7] = [
    "<300",
    "300-500",
    "500-700",
    "700-1000",
    "1000-1500",
    "1500-2000",
    "2000+",
];
const AGE_BINS: [i64; 9] = [18, 25, 30, 35, 40, 45, 50, 55, 70];
const AGE_LABELS: [&str; 8] = [
    "18-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54", "55+",
];
const TREND_AGE_BINS: [i64; 8] = [18, 25, 30, 35, 40, 45, 50, 70];
const TREND_AGE_LABELS: [&str; 7] = [
    "18-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50+",
];

// Minimum group size before a role shows up in per-role charts.
const MIN_GROUP: usize = 10;

struct Candidate {
    gender: String,
    marital: String,
    city: String,
    position_type: &'static str,
    age: i64,
    salary: Option<i64>,
}

// First bin is closed at the bottom, the rest are half-open (lo, hi].
// Values outside the edges fall out of the chart entirely.
pub fn bin_index(value: i64, edges: &[i64]) -> Option<usize> {
    if edges.len() < 2 || value < edges[0] || value > edges[edges.len() - 1] {
        return None;
    }
    (1..edges.len()).find(|&i| value <= edges[i]).map(|i| i - 1)
}

pub fn position_type(position: &str) -> &'static str {
    let p = position.to_lowercase();
    if p.contains("baş mühasib") || p.contains("bas muhasib") {
        "Chief Accountant"
    } else if p.contains("köməkçi") || p.contains("komekci") {
        "Assistant Accountant"
    } else if p.contains("mühasib") || p.contains("muhasib") {
        "Accountant"
    } else if p.contains("1c") {
        "1C Operator"
    } else if p.contains("iqtisadçi") || p.contains("iqtisadci") {
        "Economist"
    } else if p.contains("maliyyə") {
        "Finance"
    } else {
        "Other"
    }
}

pub fn standardize_city(city: &str) -> String {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }
    let lower = trimmed.to_lowercase();
    if lower.contains("bak") {
        "Baku".to_string()
    } else if lower.contains("gəncə") || lower.contains("gence") {
        "Ganja".to_string()
    } else if lower.contains("sumq") {
        "Sumqayit".to_string()
    } else {
        trimmed.to_string()
    }
}

// Rows without a plausible age (18-70) are excluded from every chart.
fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, Box<dyn Error>> {
    let (headers, rows) = table::read_table(path)?;
    let parser = NumberParser::new();

    let gender_idx = column_index(&headers, "gender")?;
    let marital_idx = column_index(&headers, "marital_status")?;
    let city_idx = column_index(&headers, "city")?;
    let position_idx = column_index(&headers, "position")?;
    let age_idx = column_index(&headers, "age")?;
    let salary_idx = column_index(&headers, "min_salary")?;

    let mut candidates = Vec::new();
    for row in &rows {
        let age = match parser.parse(field(row, age_idx)) {
            Some(a) if (18..=70).contains(&a) => a,
            _ => continue,
        };
        candidates.push(Candidate {
            gender: field(row, gender_idx).trim().to_string(),
            marital: field(row, marital_idx).trim().to_string(),
            city: standardize_city(field(row, city_idx)),
            position_type: position_type(field(row, position_idx)),
            age,
            salary: parser.parse(field(row, salary_idx)),
        });
    }

    info!(
        "Loaded {} chartable candidates out of {} rows",
        candidates.len(),
        rows.len()
    );
    Ok(candidates)
}

pub fn generate_all<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    out_dir: Q,
) -> Result<(), Box<dyn Error>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let candidates = load_candidates(input)?;
    info!("Generating business insight charts...");

    chart_gender(&candidates, &out_dir.join("01_gender_distribution.png"))?;
    chart_cities(&candidates, &out_dir.join("02_geographic_distribution.png"))?;
    chart_salary(&candidates, &out_dir.join("03_salary_distribution.png"))?;
    chart_age(&candidates, &out_dir.join("04_age_distribution.png"))?;
    chart_salary_by_position(&candidates, &out_dir.join("05_salary_by_position.png"))?;
    chart_marital(&candidates, &out_dir.join("06_marital_status.png"))?;
    chart_positions(&candidates, &out_dir.join("07_position_type_distribution.png"))?;
    chart_salary_vs_age(&candidates, &out_dir.join("08_salary_vs_age.png"))?;
    chart_gender_by_position(&candidates, &out_dir.join("09_gender_by_position.png"))?;

    info!("9 business insight charts generated in {:?}", out_dir);
    Ok(())
}

fn chart_gender(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let male = candidates.iter().filter(|c| c.gender == "Kişi").count();
    let female = candidates.iter().filter(|c| c.gender == "Qadın").count();
    let total = (male + female).max(1);

    let labels = vec!["Male".to_string(), "Female".to_string()];
    let values = vec![male as f64, female as f64];
    let annotations: Vec<String> = [male, female]
        .iter()
        .map(|&v| format!("{} ({}%)", v, v * 100 / total))
        .collect();

    vertical_bars(
        path,
        "Talent Pool Distribution by Gender",
        "Gender",
        "Number of Candidates",
        &labels,
        &values,
        &annotations,
        &[STEEL_BLUE, PLUM],
        None,
    )
}

fn chart_cities(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let counts = count_frequencies(candidates.iter().map(|c| c.city.clone()));
    let total = candidates.len().max(1);
    let top: Vec<(String, usize)> = counts.into_iter().take(10).collect();

    let labels: Vec<String> = top.iter().map(|(city, _)| city.clone()).collect();
    let values: Vec<f64> = top.iter().map(|(_, n)| *n as f64).collect();
    let annotations: Vec<String> = top
        .iter()
        .map(|(_, n)| format!("{} ({:.1}%)", n, *n as f64 * 100.0 / total as f64))
        .collect();

    horizontal_bars(
        path,
        "Geographic Distribution of Accounting Talent",
        "Number of Candidates",
        "City",
        &labels,
        &values,
        &annotations,
        STEEL_BLUE,
    )
}

fn chart_salary(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut counts = vec![0usize; SALARY_LABELS.len()];
    let mut salaried = 0usize;
    for c in candidates {
        if let Some(s) = c.salary {
            if s > 0 {
                salaried += 1;
                if let Some(bin) = bin_index(s, &SALARY_BINS) {
                    counts[bin] += 1;
                }
            }
        }
    }
    let salaried = salaried.max(1);

    let labels: Vec<String> = SALARY_LABELS.iter().map(|l| l.to_string()).collect();
    let values: Vec<f64> = counts.iter().map(|&n| n as f64).collect();
    let annotations: Vec<String> = counts
        .iter()
        .map(|&n| format!("{} ({}%)", n, n * 100 / salaried))
        .collect();
    let avg_count = values.iter().sum::<f64>() / values.len() as f64;

    vertical_bars(
        path,
        "Salary Expectations Distribution (AZN Monthly)",
        "Salary Range (AZN)",
        "Number of Candidates",
        &labels,
        &values,
        &annotations,
        &[AMBER],
        Some(avg_count),
    )
}

fn chart_age(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut counts = vec![0usize; AGE_LABELS.len()];
    for c in candidates {
        if let Some(bin) = bin_index(c.age, &AGE_BINS) {
            counts[bin] += 1;
        }
    }

    let labels: Vec<String> = AGE_LABELS.iter().map(|l| l.to_string()).collect();
    let values: Vec<f64> = counts.iter().map(|&n| n as f64).collect();
    let annotations: Vec<String> = counts.iter().map(|&n| n.to_string()).collect();

    vertical_bars(
        path,
        "Age Distribution of Accounting Professionals",
        "Age Range",
        "Number of Candidates",
        &labels,
        &values,
        &annotations,
        &[BRICK],
        None,
    )
}

fn chart_salary_by_position(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut groups: HashMap<&'static str, Vec<i64>> = HashMap::new();
    for c in candidates {
        if let Some(s) = c.salary {
            if s > 0 {
                groups.entry(c.position_type).or_default().push(s);
            }
        }
    }

    let mut rows: Vec<(&str, f64, f64)> = groups
        .iter()
        .filter(|(_, salaries)| salaries.len() >= MIN_GROUP)
        .map(|(role, salaries)| (*role, mean(salaries), median(salaries)))
        .collect();
    rows.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let labels: Vec<String> = rows.iter().map(|(role, _, _)| role.to_string()).collect();
    let means: Vec<f64> = rows.iter().map(|(_, m, _)| *m).collect();
    let medians: Vec<f64> = rows.iter().map(|(_, _, m)| *m).collect();

    grouped_horizontal_bars(
        path,
        "Salary Expectations by Position Type",
        "Salary (AZN)",
        "Position Type",
        &labels,
        &[("Average", means, STEEL_BLUE), ("Median", medians, PLUM)],
    )
}

fn chart_marital(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let single = candidates.iter().filter(|c| c.marital == "Subay").count();
    let married = candidates.iter().filter(|c| c.marital == "Ailəli").count();
    let total = (single + married).max(1);

    let labels = vec!["Single".to_string(), "Married".to_string()];
    let values = vec![single as f64, married as f64];
    let annotations: Vec<String> = [single, married]
        .iter()
        .map(|&v| format!("{} ({}%)", v, v * 100 / total))
        .collect();

    vertical_bars(
        path,
        "Candidate Availability by Marital Status",
        "Marital Status",
        "Number of Candidates",
        &labels,
        &values,
        &annotations,
        &[OLIVE, AMBER],
        None,
    )
}

fn chart_positions(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let counts = count_frequencies(candidates.iter().map(|c| c.position_type.to_string()));
    let total = candidates.len().max(1);

    let labels: Vec<String> = counts.iter().map(|(role, _)| role.clone()).collect();
    let values: Vec<f64> = counts.iter().map(|(_, n)| *n as f64).collect();
    let annotations: Vec<String> = counts
        .iter()
        .map(|(_, n)| format!("{} ({:.1}%)", n, *n as f64 * 100.0 / total as f64))
        .collect();

    horizontal_bars(
        path,
        "Talent Pool Composition by Role",
        "Number of Candidates",
        "Position Type",
        &labels,
        &values,
        &annotations,
        STEEL_BLUE,
    )
}

fn chart_salary_vs_age(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut bins: Vec<Vec<i64>> = vec![Vec::new(); TREND_AGE_LABELS.len()];
    for c in candidates {
        if let Some(s) = c.salary {
            if s > 0 {
                if let Some(bin) = bin_index(c.age, &TREND_AGE_BINS) {
                    bins[bin].push(s);
                }
            }
        }
    }

    // Empty bins would break the trend line, so they are dropped.
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (i, salaries) in bins.iter().enumerate() {
        if !salaries.is_empty() {
            labels.push(TREND_AGE_LABELS[i].to_string());
            values.push(mean(salaries));
        }
    }
    let annotations: Vec<String> = values.iter().map(|v| format!("{} AZN", *v as i64)).collect();

    line_chart(
        path,
        "Average Salary Expectations by Age Group",
        "Age Range",
        "Average Salary (AZN)",
        &labels,
        &values,
        &annotations,
    )
}

fn chart_gender_by_position(candidates: &[Candidate], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut groups: HashMap<&'static str, (usize, usize)> = HashMap::new();
    for c in candidates {
        match c.gender.as_str() {
            "Kişi" => groups.entry(c.position_type).or_default().0 += 1,
            "Qadın" => groups.entry(c.position_type).or_default().1 += 1,
            _ => {}
        }
    }

    let mut rows: Vec<(&str, usize, usize)> = groups
        .iter()
        .filter(|(_, (m, f))| m + f >= MIN_GROUP)
        .map(|(role, (m, f))| (*role, *m, *f))
        .collect();
    rows.sort_by_key(|(_, m, _)| *m);

    let labels: Vec<String> = rows.iter().map(|(role, _, _)| role.to_string()).collect();
    let males: Vec<f64> = rows.iter().map(|(_, m, _)| *m as f64).collect();
    let females: Vec<f64> = rows.iter().map(|(_, _, f)| *f as f64).collect();

    grouped_horizontal_bars(
        path,
        "Gender Distribution Across Position Types",
        "Number of Candidates",
        "Position Type",
        &labels,
        &[("Male", males, STEEL_BLUE), ("Female", females, PLUM)],
    )
}

fn max_value(values: &[f64]) -> f64 {
    values.iter().cloned().fold(1.0, f64::max)
}

#[allow(clippy::too_many_arguments)]
fn vertical_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
    annotations: &[String],
    colors: &[RGBColor],
    reference: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = max_value(values) * 1.2;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .build_cartesian_2d((0..labels.len() as i32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|v: &SegmentValue<i32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_labels(labels.len().max(2))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let color = colors[i % colors.len()];
        Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), *v),
            ],
            color.filled(),
        )
    }))?;

    chart.draw_series(annotations.iter().enumerate().map(|(i, text)| {
        Text::new(
            text.clone(),
            (SegmentValue::CenterOf(i as i32), values[i] + y_max * 0.02),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    if let Some(avg) = reference {
        chart
            .draw_series(LineSeries::new(
                vec![
                    (SegmentValue::Exact(0), avg),
                    (SegmentValue::Exact(labels.len() as i32), avg),
                ],
                BRICK.stroke_width(2),
            ))?
            .label(format!("Average: {:.0} candidates", avg))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BRICK.stroke_width(2)));
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;
    }

    root.present()?;
    info!("Chart saved to {:?}", path);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn horizontal_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
    annotations: &[String],
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = max_value(values) * 1.25;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(170)
        .build_cartesian_2d(0f64..x_max, (0..labels.len() as i32).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|v: &SegmentValue<i32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_labels(labels.len().max(2))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i as i32)),
                (*v, SegmentValue::Exact(i as i32 + 1)),
            ],
            color.filled(),
        )
    }))?;

    chart.draw_series(annotations.iter().enumerate().map(|(i, text)| {
        Text::new(
            text.clone(),
            (values[i] + x_max * 0.01, SegmentValue::CenterOf(i as i32)),
            ("sans-serif", 13).into_font(),
        )
    }))?;

    root.present()?;
    info!("Chart saved to {:?}", path);
    Ok(())
}

fn grouped_horizontal_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    series: &[(&str, Vec<f64>, RGBColor)],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let group = series.len().max(1);
    let segments = labels.len() * group;
    let x_max = series
        .iter()
        .map(|(_, values, _)| max_value(values))
        .fold(1.0, f64::max)
        * 1.25;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(170)
        .build_cartesian_2d(0f64..x_max, (0..segments as i32).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|v: &SegmentValue<i32>| match v {
            SegmentValue::CenterOf(j) if *j as usize % group == 0 => {
                labels.get(*j as usize / group).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .y_labels(segments.max(2))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    for (k, (name, values, color)) in series.iter().enumerate() {
        let color = *color;
        chart
            .draw_series(values.iter().enumerate().map(move |(i, v)| {
                let seg = (i * group + k) as i32;
                Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(seg)),
                        (*v, SegmentValue::Exact(seg + 1)),
                    ],
                    color.filled(),
                )
            }))?
            .label(*name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });

        chart.draw_series(values.iter().enumerate().map(|(i, v)| {
            Text::new(
                format!("{}", *v as i64),
                (*v + x_max * 0.01, SegmentValue::CenterOf((i * group + k) as i32)),
                ("sans-serif", 12).into_font(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    info!("Chart saved to {:?}", path);
    Ok(())
}

fn line_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
    annotations: &[String],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = max_value(values) * 1.2;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(70)
        .build_cartesian_2d((0..labels.len() as i32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|v: &SegmentValue<i32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_labels(labels.len().max(2))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    chart.draw_series(LineSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (SegmentValue::CenterOf(i as i32), *v)),
        STEEL_BLUE.stroke_width(3),
    ))?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Circle::new((SegmentValue::CenterOf(i as i32), *v), 5, PLUM.filled())
    }))?;

    chart.draw_series(annotations.iter().enumerate().map(|(i, text)| {
        Text::new(
            text.clone(),
            (SegmentValue::CenterOf(i as i32), values[i] + y_max * 0.03),
            ("sans-serif", 13).into_font(),
        )
    }))?;

    root.present()?;
    info!("Chart saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_index_respects_fixed_edges() {
        assert_eq!(bin_index(0, &SALARY_BINS), Some(0));
        assert_eq!(bin_index(300, &SALARY_BINS), Some(0));
        assert_eq!(bin_index(301, &SALARY_BINS), Some(1));
        assert_eq!(bin_index(3600, &SALARY_BINS), Some(6));
        assert_eq!(bin_index(3601, &SALARY_BINS), None);
        assert_eq!(bin_index(-5, &SALARY_BINS), None);
    }

    #[test]
    fn age_bins_cover_the_clean_range() {
        assert_eq!(bin_index(18, &AGE_BINS), Some(0));
        assert_eq!(bin_index(26, &AGE_BINS), Some(1));
        assert_eq!(bin_index(70, &AGE_BINS), Some(7));
        assert_eq!(bin_index(71, &AGE_BINS), None);
    }

    #[test]
    fn position_types_from_keywords() {
        assert_eq!(position_type("Baş mühasib"), "Chief Accountant");
        assert_eq!(position_type("Mühasib köməkçisi"), "Assistant Accountant");
        assert_eq!(position_type("Mühasib"), "Accountant");
        assert_eq!(position_type("1C operator"), "1C Operator");
        assert_eq!(position_type("Maliyyə meneceri"), "Finance");
        assert_eq!(position_type("Satış təmsilçisi"), "Other");
        assert_eq!(position_type(""), "Other");
    }

    #[test]
    fn city_standardization() {
        assert_eq!(standardize_city("Bakı"), "Baku");
        assert_eq!(standardize_city("BAKI şəhəri"), "Baku");
        assert_eq!(standardize_city("Gəncə"), "Ganja");
        assert_eq!(standardize_city("Sumqayıt"), "Sumqayit");
        assert_eq!(standardize_city("  Şəki "), "Şəki");
        assert_eq!(standardize_city(""), "Unknown");
    }
}

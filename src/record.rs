use serde::Serialize;

// Fixed CSV column order. Must stay in sync with the field order below.
pub const FIELDS: [&str; 15] = [
    "id",
    "url",
    "name",
    "city",
    "phone",
    "email",
    "age",
    "gender",
    "marital_status",
    "category",
    "position",
    "min_salary",
    "education",
    "experience",
    "skills",
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileRecord {
    pub id: String,
    pub url: String,
    pub name: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub marital_status: String,
    pub category: String,
    pub position: String,
    pub min_salary: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

impl ProfileRecord {
    pub fn with_id(id: &str, url: &str) -> Self {
        ProfileRecord {
            id: id.to_string(),
            url: url.to_string(),
            ..ProfileRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_matches_struct() {
        // One CSV column per struct field.
        let rec = ProfileRecord::with_id("1", "http://example.com");
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(&rec).unwrap();
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = data.lines().next().unwrap();
        assert_eq!(header, FIELDS.join(","));
    }

    #[test]
    fn with_id_defaults_everything_else() {
        let rec = ProfileRecord::with_id("42", "http://example.com/cv.php?id=42");
        assert_eq!(rec.id, "42");
        assert_eq!(rec.url, "http://example.com/cv.php?id=42");
        assert_eq!(rec.name, "");
        assert_eq!(rec.skills, "");
    }
}

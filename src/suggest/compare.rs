//! Side-by-side comparison of name candidates

use serde::Serialize;

use crate::types::NameCandidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    /// One value per compared candidate, in input order
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub names: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn column(candidates: &[NameCandidate], value: impl Fn(&NameCandidate) -> String) -> Vec<String> {
    candidates.iter().map(value).collect()
}

/// Build a comparison table with one column per candidate
pub fn compare_candidates(candidates: &[NameCandidate]) -> ComparisonTable {
    let rows = vec![
        ComparisonRow {
            label: "Điểm",
            values: column(candidates, |c| c.effective_score().to_string()),
        },
        ComparisonRow {
            label: "Đường đời",
            values: column(candidates, |c| c.analysis.life_path.to_string()),
        },
        ComparisonRow {
            label: "Sứ mệnh",
            values: column(candidates, |c| c.analysis.expression.to_string()),
        },
        ComparisonRow {
            label: "Linh hồn",
            values: column(candidates, |c| c.analysis.soul_urge.to_string()),
        },
        ComparisonRow {
            label: "Nhân cách",
            values: column(candidates, |c| c.analysis.personality.to_string()),
        },
        ComparisonRow {
            label: "Trưởng thành",
            values: column(candidates, |c| c.analysis.maturity.to_string()),
        },
        ComparisonRow {
            label: "Ngày sinh",
            values: column(candidates, |c| c.analysis.birthday.to_string()),
        },
        ComparisonRow {
            label: "Ngũ hành",
            values: column(candidates, |c| {
                c.analysis
                    .five_element
                    .as_ref()
                    .map(|fe| fe.name_element.vi_name().to_string())
                    .unwrap_or_else(|| "-".to_string())
            }),
        },
        ComparisonRow {
            label: "Ý nghĩa",
            values: column(candidates, |c| c.meaning.clone()),
        },
    ];

    ComparisonTable {
        names: candidates.iter().map(|c| c.full_name.clone()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::analyze_full_name;
    use crate::types::ScoringConfig;

    fn candidate(full_name: &str, date: &str) -> NameCandidate {
        NameCandidate {
            surname: String::new(),
            middle_part: String::new(),
            given_name: String::new(),
            full_name: full_name.to_string(),
            meaning: "ý nghĩa".to_string(),
            analysis: analyze_full_name(full_name, date, &ScoringConfig::default()),
            blended_score: None,
        }
    }

    #[test]
    fn test_table_shape() {
        let table = compare_candidates(&[
            candidate("Nguyễn Văn An", "15/03/2024"),
            candidate("Trần Thị Lan", "01/01/0000"),
        ]);

        assert_eq!(table.names, vec!["Nguyễn Văn An", "Trần Thị Lan"]);
        assert_eq!(table.rows.len(), 9);
        assert!(table.rows.iter().all(|r| r.values.len() == 2));

        assert_eq!(table.row("Sứ mệnh").unwrap().values[0], "3");
        assert_eq!(table.row("Ngũ hành").unwrap().values, vec!["Hỏa", "-"]);
    }

    #[test]
    fn test_empty_input() {
        let table = compare_candidates(&[]);
        assert!(table.names.is_empty());
        assert!(table.rows.iter().all(|r| r.values.is_empty()));
    }
}

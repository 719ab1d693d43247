//! Name dictionaries used by the suggestion engine

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NameForgeError, Result};
use crate::types::{Gender, GenderFilter};

fn unisex() -> Gender {
    Gender::Unisex
}

/// A surname, middle name or given name with its meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    #[serde(default = "unisex")]
    pub gender: Gender,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameEntry {
    pub name: String,
    #[serde(default = "unisex")]
    pub gender: Gender,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub category: String,
}

/// Static name pools. Never mutated by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameDictionary {
    #[serde(default)]
    pub surnames: Vec<NameEntry>,
    #[serde(default)]
    pub middle_names: Vec<NameEntry>,
    #[serde(default)]
    pub given_names: Vec<NameEntry>,
    #[serde(default)]
    pub nicknames: Vec<NicknameEntry>,
}

const SURNAMES: &[(&str, &str)] = &[
    ("Nguyễn", "Họ phổ biến nhất Việt Nam"),
    ("Trần", "Dòng họ của nhà Trần"),
    ("Lê", "Dòng họ của nhà Hậu Lê"),
    ("Phạm", "Họ phổ biến miền Bắc"),
    ("Hoàng", "Màu vàng, cao quý"),
    ("Huỳnh", "Biến âm của họ Hoàng ở miền Nam"),
    ("Phan", "Họ lâu đời"),
    ("Vũ", "Mạnh mẽ, võ nghệ"),
    ("Võ", "Biến âm của họ Vũ"),
    ("Đặng", "Họ phổ biến"),
    ("Bùi", "Họ phổ biến"),
    ("Đỗ", "Họ phổ biến"),
    ("Hồ", "Hồ nước, bao la"),
    ("Ngô", "Họ lâu đời"),
    ("Dương", "Ánh mặt trời"),
];

const MIDDLE_NAMES: &[(&str, Gender, &str)] = &[
    ("Văn", Gender::Male, "Văn chương, học thức"),
    ("Đức", Gender::Male, "Đạo đức, phẩm hạnh"),
    ("Minh", Gender::Male, "Sáng suốt, thông minh"),
    ("Quốc", Gender::Male, "Đất nước"),
    ("Gia", Gender::Male, "Gia đình, dòng tộc"),
    ("Hữu", Gender::Male, "Có, sở hữu"),
    ("Thị", Gender::Female, "Tên đệm truyền thống của nữ"),
    ("Ngọc", Gender::Female, "Ngọc quý"),
    ("Thu", Gender::Female, "Mùa thu dịu dàng"),
    ("Bảo", Gender::Female, "Báu vật"),
    ("Khánh", Gender::Female, "Niềm vui, chúc mừng"),
    ("Hoài", Gender::Female, "Hoài niệm, nhớ thương"),
];

const GIVEN_NAMES: &[(&str, Gender, &str)] = &[
    ("An", Gender::Unisex, "Bình an, yên ổn"),
    ("Anh", Gender::Unisex, "Tinh anh, thông minh"),
    ("Bảo", Gender::Unisex, "Báu vật quý giá"),
    ("Khánh", Gender::Unisex, "Niềm vui, điều tốt lành"),
    ("Minh", Gender::Unisex, "Sáng suốt, thông minh"),
    ("Ngân", Gender::Female, "Tiếng chuông ngân, trong trẻo"),
    ("Lâm", Gender::Male, "Rừng cây, vững chãi"),
    ("Huy", Gender::Male, "Rực rỡ, huy hoàng"),
    ("Khang", Gender::Male, "Khỏe mạnh, an khang"),
    ("Phúc", Gender::Male, "Phúc đức, may mắn"),
    ("Quân", Gender::Male, "Quân tử, chính trực"),
    ("Dũng", Gender::Male, "Dũng cảm, can trường"),
    ("Hùng", Gender::Male, "Anh hùng, mạnh mẽ"),
    ("Đạt", Gender::Male, "Thành đạt"),
    ("Kiên", Gender::Male, "Kiên định, bền bỉ"),
    ("Long", Gender::Male, "Rồng, cao quý"),
    ("Nam", Gender::Male, "Phương Nam, nam nhi"),
    ("Phong", Gender::Male, "Gió, phong thái"),
    ("Tuấn", Gender::Male, "Tuấn tú, tài giỏi"),
    ("Trí", Gender::Male, "Trí tuệ"),
    ("Vinh", Gender::Male, "Vinh quang"),
    ("Hà", Gender::Female, "Dòng sông"),
    ("Hằng", Gender::Female, "Vầng trăng, bền lâu"),
    ("Lan", Gender::Female, "Hoa lan thanh cao"),
    ("Linh", Gender::Female, "Linh lợi, nhanh nhẹn"),
    ("Mai", Gender::Female, "Hoa mai, mùa xuân"),
    ("My", Gender::Female, "Xinh đẹp"),
    ("Nhi", Gender::Female, "Bé nhỏ, đáng yêu"),
    ("Quỳnh", Gender::Female, "Hoa quỳnh thanh khiết"),
    ("Thảo", Gender::Female, "Cỏ thơm, hiếu thảo"),
    ("Trang", Gender::Female, "Trang nhã, đoan trang"),
    ("Uyên", Gender::Female, "Uyên bác"),
    ("Vy", Gender::Female, "Nhỏ nhắn, tinh tế"),
    ("Yến", Gender::Female, "Chim yến, thanh tao"),
    ("Châu", Gender::Female, "Ngọc trai"),
    ("Hân", Gender::Female, "Hân hoan, vui vẻ"),
];

const NICKNAMES: &[(&str, Gender, &str, &str)] = &[
    ("Bin", Gender::Male, "Ngắn gọn, năng động", "Dễ thương"),
    ("Bống", Gender::Unisex, "Bé bống đáng yêu", "Dễ thương"),
    ("Bi", Gender::Male, "Viên bi tròn trịa", "Dễ thương"),
    ("Na", Gender::Female, "Quả na ngọt ngào", "Trái cây"),
    ("Cam", Gender::Unisex, "Quả cam tươi mát", "Trái cây"),
    ("Mận", Gender::Female, "Quả mận giòn ngọt", "Trái cây"),
    ("Dâu", Gender::Female, "Quả dâu xinh xắn", "Trái cây"),
    ("Sóc", Gender::Unisex, "Nhanh nhẹn như sóc", "Động vật"),
    ("Tôm", Gender::Male, "Bé tôm hiếu động", "Động vật"),
    ("Cún", Gender::Unisex, "Cún con trung thành", "Động vật"),
    ("Mèo", Gender::Female, "Mèo con dịu dàng", "Động vật"),
    ("Gấu", Gender::Male, "Gấu con mạnh mẽ", "Động vật"),
    ("Mây", Gender::Female, "Áng mây nhẹ nhàng", "Thiên nhiên"),
    ("Nắng", Gender::Female, "Tia nắng ấm áp", "Thiên nhiên"),
    ("Gió", Gender::Male, "Cơn gió tự do", "Thiên nhiên"),
    ("Sữa", Gender::Unisex, "Trắng trẻo, thơm sữa", "Đồ ăn"),
    ("Bơ", Gender::Unisex, "Béo tròn, mềm mại", "Đồ ăn"),
    ("Kem", Gender::Female, "Ngọt ngào mát lạnh", "Đồ ăn"),
    ("Tin", Gender::Male, "Niềm tin", "Ngoại ngữ"),
    ("Kelly", Gender::Female, "Tên tiếng Anh hiện đại", "Ngoại ngữ"),
    ("Tony", Gender::Male, "Tên tiếng Anh hiện đại", "Ngoại ngữ"),
];

impl NameDictionary {
    /// A small built-in dictionary of common Vietnamese names
    pub fn builtin() -> Self {
        Self {
            surnames: SURNAMES
                .iter()
                .map(|&(name, meaning)| NameEntry {
                    name: name.to_string(),
                    gender: Gender::Unisex,
                    meaning: meaning.to_string(),
                })
                .collect(),
            middle_names: to_entries(MIDDLE_NAMES),
            given_names: to_entries(GIVEN_NAMES),
            nicknames: NICKNAMES
                .iter()
                .map(|&(name, gender, meaning, category)| NicknameEntry {
                    name: name.to_string(),
                    gender,
                    meaning: meaning.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        }
    }

    /// Load a dictionary from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NameForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| NameForgeError::parse(e.to_string(), Some(content)))
    }

    /// Given names passing `filter`; unisex names pass every filter
    pub fn given_names_for(&self, filter: GenderFilter) -> Vec<&NameEntry> {
        self.given_names
            .iter()
            .filter(|n| filter.accepts(n.gender))
            .collect()
    }

    /// Middle names whose gender matches `filter` exactly
    pub fn middle_names_for(&self, filter: GenderFilter) -> Vec<&NameEntry> {
        self.middle_names
            .iter()
            .filter(|n| filter.accepts_strict(n.gender))
            .collect()
    }

    pub fn nicknames_for(&self, filter: GenderFilter) -> Vec<&NicknameEntry> {
        self.nicknames
            .iter()
            .filter(|n| filter.accepts(n.gender))
            .collect()
    }
}

fn to_entries(table: &[(&str, Gender, &str)]) -> Vec<NameEntry> {
    table
        .iter()
        .map(|&(name, gender, meaning)| NameEntry {
            name: name.to_string(),
            gender,
            meaning: meaning.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_pools_are_populated() {
        let dict = NameDictionary::builtin();
        assert!(!dict.surnames.is_empty());
        assert!(!dict.middle_names.is_empty());
        assert!(!dict.given_names.is_empty());
        assert!(!dict.nicknames.is_empty());
    }

    #[test]
    fn test_gender_pools() {
        let dict = NameDictionary::builtin();

        let male_given = dict.given_names_for(GenderFilter::Male);
        assert!(male_given.iter().all(|n| n.gender != Gender::Female));
        assert!(male_given.iter().any(|n| n.gender == Gender::Unisex));

        let female_middle = dict.middle_names_for(GenderFilter::Female);
        assert!(female_middle.iter().all(|n| n.gender == Gender::Female));

        assert_eq!(dict.given_names_for(GenderFilter::All).len(), dict.given_names.len());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "surnames": [{{"name": "Lý"}}],
                "middle_names": [{{"name": "Văn", "gender": "male"}}],
                "given_names": [{{"name": "Tú", "gender": "unisex", "meaning": "Tinh tú"}}],
                "nicknames": [{{"name": "Tí", "category": "Dễ thương"}}]
            }}"#
        )
        .unwrap();

        let dict = NameDictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.surnames[0].gender, Gender::Unisex);
        assert_eq!(dict.middle_names[0].gender, Gender::Male);
        assert_eq!(dict.given_names[0].meaning, "Tinh tú");
        assert_eq!(dict.nicknames[0].category, "Dễ thương");
    }

    #[test]
    fn test_from_file_errors() {
        let missing = NameDictionary::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(NameForgeError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let broken = NameDictionary::from_file(file.path());
        assert!(matches!(broken, Err(NameForgeError::Parse { .. })));
    }
}

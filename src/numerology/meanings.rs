//! Descriptive meanings of the numerology numbers

use serde::Serialize;

use super::indices::reduce_to_single_digit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub number: u32,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

const MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning {
        number: 1,
        name: "Người Tiên Phong",
        keywords: &["Lãnh đạo", "Độc lập", "Sáng tạo"],
        description: "Số 1 đại diện cho sự khởi đầu, lãnh đạo và quyết đoán.",
        strengths: &["Quyết đoán", "Sáng tạo", "Tự tin", "Tiên phong"],
        challenges: &["Cố chấp", "Ích kỷ", "Nóng nảy"],
    },
    NumberMeaning {
        number: 2,
        name: "Người Hòa Giải",
        keywords: &["Hợp tác", "Nhạy cảm", "Ngoại giao"],
        description: "Số 2 tượng trưng cho sự hợp tác, kiên nhẫn và nhạy cảm.",
        strengths: &["Kiên nhẫn", "Thấu hiểu", "Ngoại giao", "Hợp tác"],
        challenges: &["Thiếu quyết đoán", "Quá nhạy cảm", "Phụ thuộc"],
    },
    NumberMeaning {
        number: 3,
        name: "Người Sáng Tạo",
        keywords: &["Sáng tạo", "Lạc quan", "Biểu đạt"],
        description: "Số 3 thể hiện sự sáng tạo, lạc quan và khả năng biểu đạt.",
        strengths: &["Sáng tạo", "Vui vẻ", "Giao tiếp tốt", "Nghệ thuật"],
        challenges: &["Thiếu tập trung", "Phung phí", "Nông cạn"],
    },
    NumberMeaning {
        number: 4,
        name: "Người Xây Dựng",
        keywords: &["Ổn định", "Kỷ luật", "Chăm chỉ"],
        description: "Số 4 đại diện cho sự ổn định, thực tế và kỷ luật.",
        strengths: &["Kỷ luật", "Đáng tin cậy", "Thực tế", "Chăm chỉ"],
        challenges: &["Cứng nhắc", "Bảo thủ", "Hay lo lắng"],
    },
    NumberMeaning {
        number: 5,
        name: "Người Tự Do",
        keywords: &["Tự do", "Phiêu lưu", "Linh hoạt"],
        description: "Số 5 tượng trưng cho tự do, phiêu lưu và sự thay đổi.",
        strengths: &["Linh hoạt", "Năng động", "Tò mò", "Thích nghi"],
        challenges: &["Bồn chồn", "Thiếu kiên nhẫn", "Thiếu cam kết"],
    },
    NumberMeaning {
        number: 6,
        name: "Người Yêu Thương",
        keywords: &["Yêu thương", "Trách nhiệm", "Gia đình"],
        description: "Số 6 thể hiện tình yêu thương, trách nhiệm và sự chăm sóc.",
        strengths: &["Yêu thương", "Trách nhiệm", "Chăm sóc", "Hài hòa"],
        challenges: &["Hy sinh quá mức", "Kiểm soát", "Lo lắng"],
    },
    NumberMeaning {
        number: 7,
        name: "Người Trí Tuệ",
        keywords: &["Trí tuệ", "Phân tích", "Tâm linh"],
        description: "Số 7 đại diện cho trí tuệ, phân tích và chiều sâu tâm linh.",
        strengths: &["Thông minh", "Phân tích", "Trực giác", "Sâu sắc"],
        challenges: &["Cô đơn", "Hoài nghi", "Khó gần"],
    },
    NumberMeaning {
        number: 8,
        name: "Người Quyền Lực",
        keywords: &["Quyền lực", "Tham vọng", "Thành công"],
        description: "Số 8 tượng trưng cho quyền lực, tham vọng và thành công vật chất.",
        strengths: &["Tham vọng", "Tổ chức", "Thực tế", "Kiên định"],
        challenges: &["Tham lam", "Độc đoán", "Quá vật chất"],
    },
    NumberMeaning {
        number: 9,
        name: "Người Nhân Đạo",
        keywords: &["Nhân đạo", "Từ bi", "Lý tưởng"],
        description: "Số 9 thể hiện lòng nhân đạo, sự từ bi và lý tưởng cao đẹp.",
        strengths: &["Vị tha", "Lý tưởng", "Sáng tạo", "Truyền cảm hứng"],
        challenges: &["Mơ mộng", "Xa rời thực tế", "Dễ thất vọng"],
    },
    NumberMeaning {
        number: 11,
        name: "Bậc Thầy Trực Giác",
        keywords: &["Trực giác", "Tâm linh", "Truyền cảm hứng"],
        description: "Số 11 là Master Number, đại diện cho trực giác mạnh mẽ và tầm nhìn tâm linh.",
        strengths: &["Trực giác mạnh", "Truyền cảm hứng", "Nhạy bén", "Lý tưởng"],
        challenges: &["Căng thẳng", "Quá nhạy cảm", "Áp lực lớn"],
    },
    NumberMeaning {
        number: 22,
        name: "Bậc Thầy Kiến Tạo",
        keywords: &["Kiến tạo", "Tầm nhìn", "Thực hiện"],
        description: "Số 22 là Master Number, kết hợp tầm nhìn của 11 với khả năng thực hiện của 4.",
        strengths: &["Tầm nhìn lớn", "Thực hiện", "Kiến tạo", "Kỷ luật"],
        challenges: &["Áp lực cực lớn", "Hoàn hảo chủ nghĩa", "Kiệt sức"],
    },
    NumberMeaning {
        number: 33,
        name: "Bậc Thầy Yêu Thương",
        keywords: &["Yêu thương vô điều kiện", "Hướng dẫn", "Chữa lành"],
        description: "Số 33 là Master Number hiếm gặp, đại diện cho tình yêu thương vô điều kiện.",
        strengths: &["Yêu thương vô điều kiện", "Chữa lành", "Hướng dẫn", "Hy sinh"],
        challenges: &["Hy sinh quá mức", "Gánh nặng trách nhiệm", "Mất cân bằng"],
    },
];

fn lookup(n: u32) -> Option<NumberMeaning> {
    MEANINGS.iter().find(|m| m.number == n).copied()
}

/// Meaning of `n`, falling back to its single-digit reduction and then to
/// an "unknown" record.
pub fn get_meaning(n: u32) -> NumberMeaning {
    lookup(n)
        .or_else(|| lookup(reduce_to_single_digit(n)))
        .unwrap_or(NumberMeaning {
            number: n,
            name: "Không xác định",
            keywords: &[],
            description: "",
            strengths: &[],
            challenges: &[],
        })
}

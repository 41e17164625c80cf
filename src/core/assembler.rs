use crate::domain::model::Complaint;
use crate::utils::error::{GuardError, Result};
use chrono::NaiveDate;
use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts};

pub const CLAIM_FILENAME: &str = "Claim.docx";

const FONT_NAME: &str = "Times New Roman";
// docx run size 單位是 half-point，24 = 12pt
const FONT_SIZE: usize = 24;

/// 固定順序的信件段落；所有欄位無條件插入，不做任何驗證
pub fn claim_paragraphs(complaint: &Complaint, today: NaiveDate) -> Vec<String> {
    vec![
        format!(
            "В ООО «Вайлдберриз»\nОт: {} (ИНН {})",
            complaint.seller, complaint.inn
        ),
        "ДОСУДЕБНАЯ ПРЕТЕНЗИЯ".to_string(),
        format!("Суть: {}.", complaint.problem),
        format!("Акт: {}. Сумма: {} руб.", complaint.act, complaint.money),
        format!("Дата: {}", today.format("%Y-%m-%d")),
    ]
}

/// 一次性序列化成完整的 .docx 位元組串
pub fn render_complaint(complaint: &Complaint, today: NaiveDate) -> Result<Vec<u8>> {
    let mut docx = Docx::new();

    for (index, text) in claim_paragraphs(complaint, today).iter().enumerate() {
        docx = docx.add_paragraph(claim_paragraph(index, text));
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| GuardError::DocumentError {
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

fn claim_paragraph(index: usize, text: &str) -> Paragraph {
    let mut run = Run::new()
        .size(FONT_SIZE)
        .fonts(RunFonts::new().ascii(FONT_NAME).hi_ansi(FONT_NAME));

    for (line_index, line) in text.split('\n').enumerate() {
        if line_index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }

    let mut paragraph = Paragraph::new().add_run(run);
    // docx-rs 的段落 id 取自 process-global 計數器；固定成段落序號，
    // 同樣輸入才會得到相同位元組
    paragraph.id = format!("{:08x}", index + 1);
    paragraph
}

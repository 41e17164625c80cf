use chrono::NaiveDate;
use sellerguard::core::assembler;
use sellerguard::{Complaint, LocalStorage, Storage};
use tempfile::TempDir;

fn sample_complaint() -> Complaint {
    Complaint {
        seller: "ИП Иванов".to_string(),
        inn: "770412345678".to_string(),
        act: "Акт-2024-17".to_string(),
        money: 43500,
        problem: "Маркетплейс потерял поставку".to_string(),
    }
}

#[tokio::test]
async fn test_claim_is_rendered_and_saved_to_storage() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let bytes = assembler::render_complaint(&sample_complaint(), today).unwrap();

    let storage = LocalStorage::new(output_path);
    storage
        .write_file(assembler::CLAIM_FILENAME, &bytes)
        .await
        .unwrap();

    let saved_path = temp_dir.path().join(assembler::CLAIM_FILENAME);
    assert!(saved_path.exists());

    let saved = std::fs::read(&saved_path).unwrap();
    assert_eq!(saved, bytes);
    // .docx 是 ZIP 容器
    assert_eq!(&saved[..2], b"PK");

    // 從檔案讀回來，信件內容都要在
    let doc = docx_rs::read_docx(&saved).unwrap();
    let mut text = String::new();
    for child in &doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for para_child in &paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        match run_child {
                            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
                            docx_rs::RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    assert!(text.contains("В ООО «Вайлдберриз»"));
    assert!(text.contains("От: ИП Иванов (ИНН 770412345678)"));
    assert!(text.contains("ДОСУДЕБНАЯ ПРЕТЕНЗИЯ"));
    assert!(text.contains("Суть: Маркетплейс потерял поставку."));
    assert!(text.contains("Акт: Акт-2024-17. Сумма: 43500 руб."));
    assert!(text.contains("Дата: 2024-03-08"));
}

#[test]
fn test_same_inputs_give_byte_identical_documents() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let complaint = sample_complaint();

    let first = assembler::render_complaint(&complaint, today).unwrap();
    let second = assembler::render_complaint(&complaint, today).unwrap();

    assert_eq!(first, second);
}

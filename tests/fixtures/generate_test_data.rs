// ==========================================
// 테스트 데이터 생성기
// ==========================================
// 용도: 대상자 입력 CSV 데이터셋 6종 생성
// 출력: tests/fixtures/datasets/*.csv
// 시각 값은 모두 상류 도구 형식(전날 23:59:08)으로 기록
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// CSV 헤더 (입력 열 이름)
const CSV_HEADER: &[&str] = &[
    "학번",
    "신체등급",
    "의무사관후보생",
    "생년월일",
    "박사과정진입일",
];

// 대상자 레코드
#[derive(Clone)]
struct CohortRecord {
    student_id: String,
    fitness: String,
    medical: String,
    birth: String,
    program_start: String,
}

impl CohortRecord {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.fitness.clone(),
            self.medical.clone(),
            self.birth.clone(),
            self.program_start.clone(),
        ]
    }
}

/// 실제 날짜 → 상류 도구 형식 문자열
fn sentinel(date: NaiveDate) -> String {
    let previous = date - Duration::days(1);
    format!("{} 23:59:08", previous.format("%Y-%m-%d"))
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

// 정상 대상자 레코드
fn generate_normal_record(index: usize) -> CohortRecord {
    let start_year = 2019 + (index % 6) as i32;
    let start_month = if index % 3 == 0 { 9 } else { 3 };
    let birth = ymd(1993, 1, 1) + Duration::days((index * 37 % 2900) as i64);

    CohortRecord {
        student_id: format!("{}{:04}", start_year, index + 1),
        fitness: if index % 7 == 0 { "보충역" } else { "현역" }.to_string(),
        medical: if index % 11 == 0 && index % 7 != 0 {
            "O".to_string()
        } else {
            String::new()
        },
        birth: sentinel(birth),
        program_start: sentinel(ymd(start_year, start_month, 1)),
    }
}

fn write_dataset(name: &str, records: &[CohortRecord]) -> Result<(), Box<dyn Error>> {
    let path = format!("{}/{}", OUTPUT_DIR, name);
    let file = File::create(&path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(&record.to_row())?;
    }
    wtr.flush()?;

    println!("✓ {} 생성 ({}건)", name, records.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("테스트 데이터셋 생성 시작...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 정상 데이터 (60건)
    let normal: Vec<_> = (0..60).map(generate_normal_record).collect();
    write_dataset("01_normal_cohort.csv", &normal)?;

    // 2. 대용량 데이터 (1000건)
    let large: Vec<_> = (0..1000).map(|i| generate_normal_record(i + 10000)).collect();
    write_dataset("02_large_cohort.csv", &large)?;

    // 3. 정원 부족: 의무사관후보생 3학기 다수
    write_dataset("03_medical_shortfall.csv", &generate_medical_shortfall())?;

    // 4. 진입월 위반 (2·3·8·9월 이외)
    write_dataset("04_anchor_violations.csv", &generate_anchor_violations())?;

    // 5. 센티널 불일치 (치명 오류)
    write_dataset("05_malformed_sentinel.csv", &generate_malformed_sentinel())?;

    // 6. 학번 중복
    write_dataset("06_duplicate_ids.csv", &generate_duplicate_ids())?;

    println!("✓ 모든 테스트 데이터셋 생성 완료");
    Ok(())
}

fn generate_medical_shortfall() -> Vec<CohortRecord> {
    (0..20)
        .map(|i| {
            let mut record = generate_normal_record(i + 20000);
            record.fitness = "현역".to_string();
            record.medical = "O".to_string();
            // 2024년 기준 3학기
            record.program_start = sentinel(ymd(2023, 3, 1));
            record
        })
        .collect()
}

fn generate_anchor_violations() -> Vec<CohortRecord> {
    [1u32, 4, 5, 6, 7, 10, 11, 12]
        .iter()
        .enumerate()
        .map(|(i, &month)| {
            let mut record = generate_normal_record(i + 30000);
            record.program_start = sentinel(ymd(2023, month, 15));
            record
        })
        .collect()
}

fn generate_malformed_sentinel() -> Vec<CohortRecord> {
    let mut records: Vec<_> = (0..5).map(|i| generate_normal_record(i + 40000)).collect();
    // 초 불일치
    records[2].birth = records[2].birth.replace("23:59:08", "23:59:07");
    // 날짜만 있는 값 (00:00:00)
    records[4].program_start = "2023-03-01 00:00:00".to_string();
    records
}

fn generate_duplicate_ids() -> Vec<CohortRecord> {
    let mut records: Vec<_> = (0..10).map(|i| generate_normal_record(i + 50000)).collect();
    let mut duplicate = records[3].clone();
    duplicate.birth = sentinel(ymd(1995, 6, 1));
    records.push(duplicate);
    records
}

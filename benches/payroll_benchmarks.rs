//! Performance benchmarks for the WPS payroll engine.
//!
//! Covers the hot paths of a monthly run:
//! - Single employee breakdown
//! - Batch processing of 100 and 1000 employees
//! - Pre-payroll validation of 1000 employees
//! - Pipe-delimited encoding at increasing roster sizes
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use wps_payroll::calculation::{PayrollCalculator, PayrollInput, QatarCalculator};
use wps_payroll::export::to_sif;
use wps_payroll::models::{
    ComplianceEmployee, Country, EmployeeRecord, Establishment, OvertimeCategory, OvertimeEntry,
    PayPeriod, SalaryComponentRecord, SalaryComponents,
};
use wps_payroll::processing::PayrollProcessor;
use wps_payroll::store::InMemoryStore;
use wps_payroll::validation::PrePayrollValidator;

const ORG: &str = "org_bench";

fn period() -> PayPeriod {
    PayPeriod::new(3, 2026).expect("valid period")
}

fn components(i: usize) -> SalaryComponents {
    SalaryComponents {
        basic: Decimal::from(2500 + (i % 40) * 100),
        housing: Decimal::from(1000),
        transport: Decimal::from(300),
        ..Default::default()
    }
}

/// Creates a directory with `count` complete Qatar employees.
fn create_directory(count: usize) -> InMemoryStore {
    let mut directory = InMemoryStore::new();
    for i in 0..count {
        let id = format!("emp_{:04}", i);
        let mut employee = EmployeeRecord::new(id.clone(), id.clone(), "Bench", format!("Employee {}", i));
        employee.national_id = Some(format!("{:011}", 28_400_000_000u64 + i as u64));
        employee.iban = Some(format!("QA58DOHB{:021}", i));
        employee.bank_name = Some("Doha Bank".to_string());
        employee.visa_expiry = NaiveDate::from_ymd_opt(2027, 1, 1);
        directory.add_employee(ORG, employee);
        directory.add_salary(
            ORG,
            SalaryComponentRecord {
                id: format!("sal_{}", id),
                employee_id: id,
                country: Country::Qatar,
                components: components(i),
                is_active: true,
            },
        );
    }
    directory
}

fn create_roster(count: usize) -> Vec<ComplianceEmployee> {
    (0..count)
        .map(|i| ComplianceEmployee {
            national_id: format!("{:011}", 28_400_000_000u64 + i as u64),
            name: format!("Bench Employee {}", i),
            iban: format!("QA58DOHB{:021}", i),
            bank_code: Some("12".to_string()),
            border_number: None,
            housing: Decimal::ZERO,
            basic: Decimal::new(300_000 + i as i64, 2),
            allowances: Decimal::new(130_000, 2),
            overtime: Decimal::ZERO,
            deductions: Decimal::new(5_000, 2),
            net: Decimal::new(425_000 + i as i64, 2),
        })
        .collect()
}

/// Benchmark: One employee with overtime and absence.
fn bench_single_breakdown(c: &mut Criterion) {
    let calculator = QatarCalculator::default();
    let input = PayrollInput {
        employee_id: "emp_0001".to_string(),
        components: components(7),
        overtime: vec![
            OvertimeEntry::new(OvertimeCategory::Regular, Decimal::from(12)),
            OvertimeEntry::new(OvertimeCategory::Weekend, Decimal::from(6)),
        ],
        days_absent: Decimal::from(2),
        ..Default::default()
    };

    c.bench_function("single_breakdown", |b| {
        b.iter(|| black_box(calculator.calculate(black_box(&input))))
    });
}

/// Benchmark: Batch processing into a fresh store.
fn bench_batch(c: &mut Criterion) {
    let processor = PayrollProcessor::default();
    let mut group = c.benchmark_group("batch_processing");

    for count in [100usize, 1000] {
        let directory = create_directory(count);
        group.throughput(Throughput::Elements(count as u64));
        if count >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::new("employees", count), &count, |b, _| {
            b.iter(|| {
                let mut store = InMemoryStore::new();
                let outcome = processor
                    .process(&directory, &mut store, ORG, period(), Country::Qatar, &HashMap::new())
                    .expect("batch runs");
                black_box(outcome)
            })
        });
    }

    group.finish();
}

/// Benchmark: Validation of a large clean roster.
fn bench_validation(c: &mut Criterion) {
    let directory = create_directory(1000);
    let validator = PrePayrollValidator::default();
    let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");

    let mut group = c.benchmark_group("validation");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("validate_1000", |b| {
        b.iter(|| {
            black_box(
                validator
                    .validate(&directory, ORG, period(), Country::Qatar, as_of)
                    .expect("validation runs"),
            )
        })
    });
    group.finish();
}

/// Benchmark: Pipe-delimited encoding to understand scaling behavior.
fn bench_sif_encoding(c: &mut Criterion) {
    let establishment = Establishment::new("EST-4471", "Doha Trading W.L.L.");
    let mut group = c.benchmark_group("sif_encoding");

    for count in [10usize, 100, 1000, 5000] {
        let roster = create_roster(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), &roster, |b, roster| {
            b.iter(|| black_box(to_sif(&establishment, period(), roster).expect("encodes")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_breakdown,
    bench_batch,
    bench_validation,
    bench_sif_encoding,
);
criterion_main!(benches);

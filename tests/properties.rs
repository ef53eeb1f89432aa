//! Property tests for the payroll calculation core.
//!
//! These tests exercise the record builder with randomized salary structures
//! and attendance summaries and assert the properties the rest of the system
//! relies on: determinism, the derived-summary invariant, the PF ceiling
//! clamp, and the ESI step function.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{PayrollInput, build_record};
use payroll_engine::config::{
    EsiRules, IncomeTaxSlab, PfRules, ProfessionalTaxBracket, StatutoryRates,
};
use payroll_engine::models::{
    AttendanceSummary, BasicPay, EmployeeProfile, FixedAllowances, PayPeriod, SalaryStructure,
};

fn rates() -> StatutoryRates {
    StatutoryRates {
        effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        provident_fund: PfRules {
            wage_ceiling: Decimal::new(15_000, 0),
            employee_rate: Decimal::new(12, 2),
            employer_rate: Decimal::new(12, 2),
        },
        state_insurance: EsiRules {
            wage_ceiling: Decimal::new(21_000, 0),
            employee_rate: Decimal::new(75, 4),
            employer_rate: Decimal::new(325, 4),
        },
        professional_tax: vec![
            ProfessionalTaxBracket {
                gross_up_to: Some(Decimal::new(10_000, 0)),
                tax: Decimal::ZERO,
            },
            ProfessionalTaxBracket {
                gross_up_to: Some(Decimal::new(15_000, 0)),
                tax: Decimal::new(150, 0),
            },
            ProfessionalTaxBracket {
                gross_up_to: None,
                tax: Decimal::new(200, 0),
            },
        ],
        income_tax: vec![
            IncomeTaxSlab {
                annual_up_to: Some(Decimal::new(300_000, 0)),
                rate: Decimal::ZERO,
            },
            IncomeTaxSlab {
                annual_up_to: Some(Decimal::new(700_000, 0)),
                rate: Decimal::new(5, 2),
            },
            IncomeTaxSlab {
                annual_up_to: None,
                rate: Decimal::new(20, 2),
            },
        ],
    }
}

prop_compose! {
    fn arb_input()(
        basic in 5_000u32..200_000,
        hra_pct in 0u32..=60,
        conveyance in 0u32..5_000,
        medical in 0u32..5_000,
        total_days in 28u32..=31,
        lop_days in 0u32..=10,
        pf_applicable in any::<bool>(),
        esi_applicable in any::<bool>(),
    ) -> PayrollInput {
        let lop_days = lop_days.min(total_days);
        let monthly_basic = Decimal::from(basic);
        // CTC comfortably above the named components so the balancing head
        // stays in play.
        let annual_ctc = monthly_basic * Decimal::from(30);

        PayrollInput {
            employee: EmployeeProfile {
                id: "emp_prop".to_string(),
                name: "Property Employee".to_string(),
                department: "engineering".to_string(),
                is_active: true,
            },
            structure: SalaryStructure {
                effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                annual_ctc,
                basic: BasicPay::Amount(monthly_basic),
                hra_percentage: Decimal::new(hra_pct as i64, 2),
                allowances: FixedAllowances {
                    conveyance: Decimal::from(conveyance),
                    medical: Decimal::from(medical),
                    education: Decimal::ZERO,
                    lta: Decimal::ZERO,
                    other: Decimal::ZERO,
                },
                overtime_hourly_rate: None,
                pf_applicable,
                esi_applicable,
                bank: None,
            },
            attendance: AttendanceSummary {
                total_days,
                present_days: total_days - lop_days,
                paid_leave_days: 0,
                loss_of_pay_days: lop_days,
                other_leave_days: 0,
                overtime_hours: Decimal::ZERO,
            },
            external_tds: None,
        }
    }
}

proptest! {
    /// For fixed inputs, two builds produce identical earnings and
    /// deductions (only ids and timestamps differ).
    #[test]
    fn prop_builder_is_deterministic(input in arb_input()) {
        let period = PayPeriod::new(2025, 6).unwrap();
        let rates = rates();

        let first = build_record(&input, period, &rates).unwrap();
        let second = build_record(&input, period, &rates).unwrap();

        prop_assert_eq!(first.earnings, second.earnings);
        prop_assert_eq!(first.deductions, second.deductions);
        prop_assert_eq!(first.summary(), second.summary());
    }

    /// Net salary is exactly gross minus total deductions, and both sides
    /// of the subtraction are non-negative.
    #[test]
    fn prop_summary_invariant(input in arb_input()) {
        let period = PayPeriod::new(2025, 6).unwrap();
        let record = build_record(&input, period, &rates()).unwrap();

        prop_assert!(record.gross_earnings() >= Decimal::ZERO);
        prop_assert!(record.total_deductions() >= Decimal::ZERO);
        prop_assert_eq!(
            record.net_salary(),
            record.gross_earnings() - record.total_deductions()
        );
    }

    /// Gross earnings equal the exact sum of the earnings fields, and every
    /// field is non-negative.
    #[test]
    fn prop_gross_is_exact_sum(input in arb_input()) {
        let period = PayPeriod::new(2025, 6).unwrap();
        let record = build_record(&input, period, &rates()).unwrap();

        let e = &record.earnings;
        let fields = [
            e.basic, e.hra, e.special_allowance, e.conveyance, e.medical,
            e.education, e.lta, e.other, e.overtime,
        ];
        prop_assert!(fields.iter().all(|f| *f >= Decimal::ZERO));
        let sum: Decimal = fields.iter().copied().sum();
        prop_assert_eq!(record.gross_earnings(), sum);
    }

    /// The employee PF contribution never exceeds the ceiling times the
    /// rate, regardless of basic.
    #[test]
    fn prop_pf_never_exceeds_ceiling_contribution(input in arb_input()) {
        let period = PayPeriod::new(2025, 6).unwrap();
        let record = build_record(&input, period, &rates()).unwrap();

        // 15,000 * 12%
        let cap = Decimal::new(1_800, 0);
        prop_assert!(record.deductions.pf_employee <= cap);
    }

    /// ESI is a step function of gross: zero above the ceiling, positive at
    /// or below it (when applicable and gross is positive).
    #[test]
    fn prop_esi_step_function(input in arb_input()) {
        let period = PayPeriod::new(2025, 6).unwrap();
        let record = build_record(&input, period, &rates()).unwrap();

        let ceiling = Decimal::new(21_000, 0);
        let gross = record.gross_earnings();
        if gross > ceiling || !input.structure.esi_applicable {
            prop_assert_eq!(record.deductions.esi_employee, Decimal::ZERO);
        } else if gross > Decimal::ZERO {
            prop_assert!(record.deductions.esi_employee > Decimal::ZERO);
        }
    }
}

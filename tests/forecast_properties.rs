//! Property tests for the forecast engine.
//!
//! Rosters, leave and help records are generated against the shipped
//! standards table.

use proptest::prelude::*;
use rust_decimal::Decimal;

use salon_forecast::calculation::{ForecastInput, ForecastOptions, compute_forecast};
use salon_forecast::config::ConfigLoader;
use salon_forecast::models::{
    BaselineRevenueStandard, Employee, ForecastPeriod, HelpRecord, LeaveRecord, Location, Rank,
    Role,
};

const LOCATION_IDS: [&str; 3] = ["loc_a", "loc_b", "loc_c"];

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
struct Scenario {
    month: u32,
    employees: Vec<Employee>,
    helps: Vec<HelpRecord>,
}

fn standards() -> Vec<BaselineRevenueStandard> {
    ConfigLoader::load("./config/salon")
        .expect("Failed to load config")
        .standards()
        .to_vec()
}

fn locations() -> Vec<Location> {
    LOCATION_IDS
        .iter()
        .map(|id| Location::new(*id, id.to_uppercase()))
        .collect()
}

fn employee_strategy() -> impl Strategy<Value = (bool, usize, usize)> {
    (any::<bool>(), 0..Rank::ALL.len(), 0..LOCATION_IDS.len())
}

// Six helps of at most 16% keep every employee's combined deduction under 100%
fn help_strategy() -> impl Strategy<Value = (usize, usize, u32)> {
    (0usize..8, 0..LOCATION_IDS.len(), 0u32..=16)
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (
        1u32..=12,
        prop::collection::vec(employee_strategy(), 1..8),
        prop::collection::vec(help_strategy(), 0..6),
    )
        .prop_map(|(month, raw_employees, raw_helps)| {
            let employees: Vec<Employee> = raw_employees
                .into_iter()
                .enumerate()
                .map(|(i, (nailist, rank, location))| Employee {
                    id: format!("emp_{}", i),
                    name: format!("Staff {}", i),
                    location_id: LOCATION_IDS[location].to_string(),
                    role: if nailist { Role::Nailist } else { Role::Eyelist },
                    rank: Rank::ALL[rank],
                })
                .collect();

            let helps = raw_helps
                .into_iter()
                .enumerate()
                .map(|(i, (employee, to, percent))| {
                    let employee = &employees[employee % employees.len()];
                    HelpRecord {
                        id: format!("help_{}", i),
                        employee_id: employee.id.clone(),
                        year: 2026,
                        month,
                        from_location_id: employee.location_id.clone(),
                        to_location_id: LOCATION_IDS[to].to_string(),
                        deduction_percent: Decimal::from(percent),
                        addition_percent: Decimal::from(percent),
                    }
                })
                .collect();

            Scenario {
                month,
                employees,
                helps,
            }
        })
}

fn options(month: u32) -> ForecastOptions {
    ForecastOptions::for_period(ForecastPeriod { year: 2026, month })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn forecast_is_deterministic(scenario in scenario_strategy()) {
        let standards = standards();
        let locations = locations();
        let input = ForecastInput {
            locations: &locations,
            employees: &scenario.employees,
            standards: &standards,
            help_records: &scenario.helps,
            ..ForecastInput::default()
        };

        let first = compute_forecast(&input, &options(scenario.month)).unwrap();
        let second = compute_forecast(&input, &options(scenario.month)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn promo_doubles_retail_and_keeps_treatment(scenario in scenario_strategy()) {
        let standards = standards();
        let locations = locations();
        let input = ForecastInput {
            locations: &locations,
            employees: &scenario.employees,
            standards: &standards,
            ..ForecastInput::default()
        };

        let plain = compute_forecast(&input, &options(scenario.month)).unwrap();
        let mut promo_options = options(scenario.month);
        promo_options.promo_period = true;
        let promo = compute_forecast(&input, &promo_options).unwrap();

        prop_assert_eq!(promo.grand_total.treatment, plain.grand_total.treatment);
        prop_assert_eq!(promo.grand_total.retail, plain.grand_total.retail * 2);
    }

    #[test]
    fn matched_help_conserves_chain_total(scenario in scenario_strategy()) {
        let standards = standards();
        let locations = locations();
        let without_help = ForecastInput {
            locations: &locations,
            employees: &scenario.employees,
            standards: &standards,
            ..ForecastInput::default()
        };
        let with_help = ForecastInput {
            help_records: &scenario.helps,
            ..without_help
        };

        let baseline = compute_forecast(&without_help, &options(scenario.month)).unwrap();
        let moved = compute_forecast(&with_help, &options(scenario.month)).unwrap();

        // Each rounded amount can drift by half a unit per stream
        let tolerance = 2 * (scenario.employees.len() + scenario.helps.len()) as i64;
        let drift = (moved.grand_total.total - baseline.grand_total.total).abs();
        prop_assert!(drift <= tolerance, "drift {} exceeds {}", drift, tolerance);
    }

    #[test]
    fn employees_on_leave_contribute_nothing(scenario in scenario_strategy()) {
        let standards = standards();
        let locations = locations();
        let leave: Vec<LeaveRecord> = scenario
            .employees
            .iter()
            .map(|e| LeaveRecord {
                id: format!("leave_{}", e.id),
                employee_id: e.id.clone(),
                year: 2026,
                month: scenario.month,
                activity_ratio: None,
            })
            .collect();
        let input = ForecastInput {
            locations: &locations,
            employees: &scenario.employees,
            standards: &standards,
            help_records: &scenario.helps,
            leave_records: &leave,
            ..ForecastInput::default()
        };

        let report = compute_forecast(&input, &options(scenario.month)).unwrap();
        prop_assert_eq!(report.grand_total.total, 0);
        for location in &report.locations {
            prop_assert_eq!(location.help_received.total, 0);
            prop_assert!(location.employee_forecasts.iter().all(|e| e.on_leave));
        }
    }
}

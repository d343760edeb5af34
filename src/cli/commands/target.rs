//! Target command handler: score needed on a module's remaining work

use grade_tracker::config::Config;
use grade_tracker::core::conversion::normalize;
use grade_tracker::core::module_grade::{current_grade, remaining_weighting};
use grade_tracker::core::projection::{
    projected_final_grade, required_score_for_module, TargetOutlook,
};
use grade_tracker::models::GradingSystem;
use grade_tracker::{debug, verbose};
use std::path::Path;

/// Run the target command.
///
/// `target` is in the record's grading system; scores are always percentages,
/// so four-point targets are converted before solving.
pub fn run(record: &Path, code: &str, target: Option<f64>, config: &Config) -> Result<(), String> {
    let (student, _) = super::load(record, config)?;
    let system = student.grading_system;
    let module = student
        .find_module(code)
        .ok_or_else(|| format!("Module '{code}' not found in {}", record.display()))?;

    let target = target.unwrap_or_else(|| config.target_for(system));
    let target_percentage = normalize(target, system, GradingSystem::Percentage);
    debug!(
        "Target {target} in {system} is {target_percentage:.1}% for module {}",
        module.code
    );

    println!("{} {}", module.code, module.name);
    println!(
        "Current: {}",
        GradingSystem::Percentage.format_optional(current_grade(module))
    );
    println!(
        "Remaining weighting: {:.1}%",
        remaining_weighting(module)
    );
    verbose!(
        "Best case: {}",
        GradingSystem::Percentage.format_grade(projected_final_grade(module))
    );

    let outlook = TargetOutlook::from_required(required_score_for_module(module, target_percentage));
    let target_label = system.format_grade(target);
    match outlook {
        TargetOutlook::Locked => {
            let met = current_grade(module).is_some_and(|g| g >= target_percentage);
            let verdict = if met { "met" } else { "missed" };
            println!("Target {target_label}: {} (target {verdict})", outlook.describe());
        }
        _ => println!("Target {target_label}: {}", outlook.describe()),
    }
    Ok(())
}

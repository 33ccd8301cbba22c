//! Build recorder: reference → delta → statistics → gates → analysis run.

use tollgate_core::config::TollgateConfig;
use tollgate_core::errors::EvaluationResult;
use tollgate_core::traits::LogSink;

use crate::delta::DeltaReport;
use crate::gates::QualityGateEvaluator;
use crate::health::HealthDescriptor;
use crate::history::{AnalysisHistory, BuildHistory, ReferenceResolver};
use crate::log::EvaluationLog;
use crate::model::{AnalysisRun, BuildInfo, IssueCollection};

/// Evaluates one tool's issues for one build.
#[derive(Debug, Clone)]
pub struct IssueRecorder {
    resolver: ReferenceResolver,
    evaluator: QualityGateEvaluator,
    health: Option<HealthDescriptor>,
}

impl IssueRecorder {
    pub fn new(resolver: ReferenceResolver, evaluator: QualityGateEvaluator) -> Self {
        Self {
            resolver,
            evaluator,
            health: None,
        }
    }

    pub fn with_health(mut self, health: HealthDescriptor) -> Self {
        self.health = Some(health);
        self
    }

    /// Builds a recorder from configuration. Invalid gate metrics,
    /// criticalities or severities are reported here, before any build is
    /// evaluated.
    pub fn from_config(config: &TollgateConfig) -> EvaluationResult<Self> {
        let resolver = ReferenceResolver::from_config(&config.reference);
        let evaluator = QualityGateEvaluator::from_config(&config.quality_gates)?;
        let health = HealthDescriptor::from_config(&config.health)?;
        Ok(Self {
            resolver,
            evaluator,
            health,
        })
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    pub fn evaluator(&self) -> &QualityGateEvaluator {
        &self.evaluator
    }

    /// Runs the full evaluation of `issues` reported by `tool_id` on `build`.
    ///
    /// Every log line is kept on the returned run and forwarded to `log`
    /// in order.
    pub fn record(
        &self,
        history: &dyn BuildHistory,
        build: &BuildInfo,
        tool_id: &str,
        issues: IssueCollection,
        log: &mut dyn LogSink,
    ) -> AnalysisRun {
        let mut evaluation_log = EvaluationLog::new();

        let reference = self
            .resolver
            .resolve_logged(history, build.number, tool_id, &mut evaluation_log);
        match reference {
            Some(run) => evaluation_log.info(format!(
                "Using reference build '{}' to compute new, fixed, and outstanding issues",
                run.build.display_name()
            )),
            None => {
                evaluation_log.info(format!(
                    "No valid reference build found that meets the criteria ({})",
                    self.resolver.policy().name()
                ));
                evaluation_log.info("All reported issues will be considered new".to_string());
            }
        }

        let report = DeltaReport::new(issues, reference);
        if reference.is_some() {
            evaluation_log.info(format!(
                "Issues delta (vs. reference build): outstanding: {}, new: {}, fixed: {}",
                report.delta.outstanding.size(),
                report.delta.new.size(),
                report.delta.fixed.size()
            ));
        }

        let statistics = report.statistics();
        let quality_gate = self.evaluator.evaluate(&statistics, &mut evaluation_log);
        let health = self.health.and_then(|h| h.report(&report.all));

        let previous = AnalysisHistory::new(history, build.number, tool_id)
            .with_max_lookback(self.resolver.max_lookback())
            .previous();

        tracing::info!(
            tool_id,
            build = build.number,
            reference = ?report.reference_build,
            status = ?quality_gate.overall_status,
            "recorded analysis run"
        );

        for line in evaluation_log.info_messages() {
            log.info(line.clone());
        }
        for line in evaluation_log.error_messages() {
            log.error(line.clone());
        }
        let (info_messages, error_messages) = evaluation_log.into_parts();

        let mut run = AnalysisRun {
            size_per_origin: report.all.size_per_origin(),
            reference_build: report.reference_build,
            issues: report.all,
            outstanding_issues: report.delta.outstanding,
            new_issues: report.delta.new,
            fixed_issues: report.delta.fixed,
            statistics,
            quality_gate,
            info_messages,
            error_messages,
            health,
            ..AnalysisRun::new(tool_id, build.clone())
        };
        run.track_streaks(previous);
        run
    }
}

//! Form Evaluator Use Case
//!
//! Evaluates every field of a [`FormSchema`] against a [`FormState`]:
//! dependency conditions decide visibility, enablement and whether the
//! field is required, then the field's rule chain is validated and a
//! message rendered for the first failure.

use crate::report::{FieldReport, FormReport, LintFinding};
use crate::schema::{DependencyAction, FieldSpec, FormSchema};
use crate::state::FormState;
use fieldlogic_domain::constants::RULE_REQUIRED;
use fieldlogic_domain::{Error, FieldValue, Result, Subject, SubjectKind};
use fieldlogic_expr::{ExpressionEngine, FieldState};
use fieldlogic_rules::{MessageCatalog, RuleChain, RuleEngine, RuleOutcome, RuleToken};
use tracing::{debug, info};

/// A schema field viewed as a rule subject
struct FormFieldSubject<'a> {
    field: &'a FieldSpec,
    state: &'a FormState,
}

impl Subject for FormFieldSubject<'_> {
    fn kind(&self) -> SubjectKind {
        self.field.kind
    }

    fn is_checked(&self) -> bool {
        self.state.is_checked(&self.field.name)
    }

    fn field_value(&self, name: &str) -> FieldValue {
        self.state.value(name)
    }
}

/// Form evaluation service
#[derive(Debug, Clone)]
pub struct FormEvaluator {
    expressions: ExpressionEngine,
    rules: RuleEngine,
    messages: MessageCatalog,
    strict_unknown_rules: bool,
}

impl Default for FormEvaluator {
    fn default() -> Self {
        Self::new(
            ExpressionEngine::new(),
            RuleEngine::standard(),
            MessageCatalog::english(),
        )
    }
}

impl FormEvaluator {
    /// Create an evaluator from its engines and message catalog
    pub fn new(expressions: ExpressionEngine, rules: RuleEngine, messages: MessageCatalog) -> Self {
        Self {
            expressions,
            rules,
            messages,
            strict_unknown_rules: false,
        }
    }

    /// Reject schemas naming unregistered rules in [`FormEvaluator::prepare`]
    #[must_use]
    pub fn with_strict_unknown_rules(mut self, strict: bool) -> Self {
        self.strict_unknown_rules = strict;
        self
    }

    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Check a loaded schema before use
    ///
    /// Structural problems always fail; unknown rule names fail only in
    /// strict mode and are logged otherwise.
    pub fn prepare(&self, schema: &FormSchema) -> Result<()> {
        schema.check()?;
        for field in &schema.fields {
            if self.strict_unknown_rules {
                self.rules.check_chain(field.rules())?;
            } else {
                for rule in self.rules.unknown_rules(field.rules()) {
                    debug!(field = %field.name, rule = %rule, "Schema names unknown rule");
                }
            }
        }
        Ok(())
    }

    /// Static inspection: unknown rules and unparsable conditions
    pub fn lint(&self, schema: &FormSchema) -> Vec<LintFinding> {
        let mut findings = Vec::new();
        let probe = FormState::new();
        for field in &schema.fields {
            for rule in self.rules.unknown_rules(field.rules()) {
                findings.push(LintFinding::UnknownRule {
                    field: field.name.clone(),
                    rule,
                });
            }
            for dependency in &field.dependencies {
                if let Err(Error::Expression { message }) = self.expressions.try_evaluate(
                    &dependency.when,
                    &FieldValue::Undefined,
                    &FieldState::default(),
                    &probe,
                ) {
                    findings.push(LintFinding::InvalidExpression {
                        field: field.name.clone(),
                        expression: dependency.when.clone(),
                        message,
                    });
                }
            }
        }
        findings
    }

    /// Evaluate every field of `schema` against `state`
    pub fn evaluate(&self, schema: &FormSchema, state: &FormState) -> FormReport {
        let fields: Vec<FieldReport> = schema
            .fields
            .iter()
            .map(|field| self.evaluate_field(field, state))
            .collect();
        let report = FormReport::new(fields);
        info!(
            fields = report.fields.len(),
            invalid = report.invalid_fields().count(),
            "Form evaluated"
        );
        report
    }

    fn evaluate_field(&self, field: &FieldSpec, state: &FormState) -> FieldReport {
        let value = state.value(&field.name);
        let mut chain = RuleChain::parse(field.rules());
        let flags = self.apply_dependencies(field, &value, state, &chain);

        let mut report = FieldReport {
            name: field.name.clone(),
            visible: flags.visible,
            disabled: flags.disabled,
            required: flags.required,
            skipped: !flags.visible || flags.disabled,
            outcome: RuleOutcome::Valid,
            message: None,
        };
        if report.skipped {
            debug!(field = %field.name, "Skipping hidden or disabled field");
            return report;
        }

        if flags.required && !chain.contains(RULE_REQUIRED) {
            chain.push(RuleToken {
                name: RULE_REQUIRED.to_string(),
                param: None,
            });
        } else if !flags.required {
            chain.remove(RULE_REQUIRED);
        }

        let subject = FormFieldSubject { field, state };
        report.outcome = self.rules.validate_chain(&value, &chain, &subject);
        report.message = self.messages.render(&report.outcome, field.label());
        report
    }

    /// Fold the field's dependencies, in order, into its state flags
    ///
    /// Each action sets its flag when the condition holds and the opposite
    /// when it does not, so `show` alone means hidden otherwise. Later
    /// dependencies see (and override) the flags set by earlier ones.
    fn apply_dependencies(
        &self,
        field: &FieldSpec,
        value: &FieldValue,
        state: &FormState,
        chain: &RuleChain,
    ) -> FieldState {
        let mut flags = FieldState {
            required: chain.contains(RULE_REQUIRED),
            checked: state.is_checked(&field.name),
            ..FieldState::default()
        };
        for dependency in &field.dependencies {
            let holds = self
                .expressions
                .evaluate(&dependency.when, value, &flags, state);
            debug!(field = %field.name, action = ?dependency.action, holds, "Dependency evaluated");
            match dependency.action {
                DependencyAction::Show => flags.visible = holds,
                DependencyAction::Hide => flags.visible = !holds,
                DependencyAction::Enable => flags.disabled = !holds,
                DependencyAction::Disable => flags.disabled = holds,
                DependencyAction::Require => flags.required = holds,
                DependencyAction::Optional => flags.required = !holds,
            }
        }
        flags
    }
}

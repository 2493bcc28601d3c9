use ahash::AHashMap;
use std::collections::BTreeMap;
use std::fmt;

/// A node's editable configuration values. Ordered so exports are stable.
pub type Parameters = BTreeMap<String, String>;

/// A typed parameter schema that can render its defaults into a [`Parameters`] bag.
pub trait ParameterSchema {
    fn entries(&self) -> Vec<(&'static str, String)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastModel {
    Arima,
    ExponentialSmoothing,
    GradientBoosting,
    Ensemble,
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ForecastModel::Arima => "arima",
            ForecastModel::ExponentialSmoothing => "exponential-smoothing",
            ForecastModel::GradientBoosting => "gradient-boosting",
            ForecastModel::Ensemble => "ensemble",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyStockMethod {
    ServiceLevel,
    DaysOfCover,
}

impl fmt::Display for SafetyStockMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SafetyStockMethod::ServiceLevel => "service-level",
            SafetyStockMethod::DaysOfCover => "days-of-cover",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleObjective {
    MinimizeChangeovers,
    MinimizeLateness,
    MaximizeThroughput,
}

impl fmt::Display for ScheduleObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScheduleObjective::MinimizeChangeovers => "minimize-changeovers",
            ScheduleObjective::MinimizeLateness => "minimize-lateness",
            ScheduleObjective::MaximizeThroughput => "maximize-throughput",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemandForecastingParams {
    pub horizon_weeks: u32,
    pub model: ForecastModel,
    pub confidence_level: f32,
    pub include_seasonality: bool,
}

impl Default for DemandForecastingParams {
    fn default() -> Self {
        Self {
            horizon_weeks: 12,
            model: ForecastModel::Ensemble,
            confidence_level: 0.95,
            include_seasonality: true,
        }
    }
}

impl ParameterSchema for DemandForecastingParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("horizonWeeks", self.horizon_weeks.to_string()),
            ("model", self.model.to_string()),
            ("confidenceLevel", self.confidence_level.to_string()),
            ("includeSeasonality", self.include_seasonality.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryOptimizationParams {
    pub service_level: f32,
    pub review_period_days: u32,
    pub safety_stock_method: SafetyStockMethod,
}

impl Default for InventoryOptimizationParams {
    fn default() -> Self {
        Self {
            service_level: 0.98,
            review_period_days: 7,
            safety_stock_method: SafetyStockMethod::ServiceLevel,
        }
    }
}

impl ParameterSchema for InventoryOptimizationParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("serviceLevel", self.service_level.to_string()),
            ("reviewPeriodDays", self.review_period_days.to_string()),
            ("safetyStockMethod", self.safety_stock_method.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSchedulingParams {
    pub planning_horizon_days: u32,
    pub objective: ScheduleObjective,
    pub allow_overtime: bool,
}

impl Default for ProductionSchedulingParams {
    fn default() -> Self {
        Self {
            planning_horizon_days: 14,
            objective: ScheduleObjective::MinimizeChangeovers,
            allow_overtime: false,
        }
    }
}

impl ParameterSchema for ProductionSchedulingParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("planningHorizonDays", self.planning_horizon_days.to_string()),
            ("objective", self.objective.to_string()),
            ("allowOvertime", self.allow_overtime.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssortmentPlanningParams {
    pub max_skus_per_store: u32,
    pub min_margin_pct: f32,
}

impl Default for AssortmentPlanningParams {
    fn default() -> Self {
        Self {
            max_skus_per_store: 250,
            min_margin_pct: 18.0,
        }
    }
}

impl ParameterSchema for AssortmentPlanningParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("maxSkusPerStore", self.max_skus_per_store.to_string()),
            ("minMarginPct", self.min_margin_pct.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMaterialPlanningParams {
    pub lead_time_days: u32,
    pub lot_sizing: String,
}

impl Default for RawMaterialPlanningParams {
    fn default() -> Self {
        Self {
            lead_time_days: 21,
            lot_sizing: "lot-for-lot".to_string(),
        }
    }
}

impl ParameterSchema for RawMaterialPlanningParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("leadTimeDays", self.lead_time_days.to_string()),
            ("lotSizing", self.lot_sizing.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPrioritizationParams {
    pub scoring_method: String,
    pub budget_cap: u64,
}

impl Default for ProjectPrioritizationParams {
    fn default() -> Self {
        Self {
            scoring_method: "weighted-score".to_string(),
            budget_cap: 500_000,
        }
    }
}

impl ParameterSchema for ProjectPrioritizationParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("scoringMethod", self.scoring_method.clone()),
            ("budgetCap", self.budget_cap.to_string()),
        ]
    }
}

/// Shared by every intelligent agent template.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentParams {
    pub model: String,
    pub temperature: f32,
    pub require_approval: bool,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            model: "planner-default".to_string(),
            temperature: 0.2,
            require_approval: true,
        }
    }
}

impl ParameterSchema for AgentParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("model", self.model.clone()),
            ("temperature", self.temperature.to_string()),
            ("requireApproval", self.require_approval.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErpConnectorParams {
    pub system_id: String,
    pub client: String,
    pub sync_interval_minutes: u32,
}

impl Default for ErpConnectorParams {
    fn default() -> Self {
        Self {
            system_id: "PRD".to_string(),
            client: "100".to_string(),
            sync_interval_minutes: 60,
        }
    }
}

impl ParameterSchema for ErpConnectorParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("systemId", self.system_id.clone()),
            ("client", self.client.clone()),
            ("syncIntervalMinutes", self.sync_interval_minutes.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseConnectorParams {
    pub warehouse: String,
    pub database: String,
    pub schema: String,
}

impl Default for WarehouseConnectorParams {
    fn default() -> Self {
        Self {
            warehouse: "PLANNING_WH".to_string(),
            database: "SUPPLY_CHAIN".to_string(),
            schema: "PUBLIC".to_string(),
        }
    }
}

impl ParameterSchema for WarehouseConnectorParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("warehouse", self.warehouse.clone()),
            ("database", self.database.clone()),
            ("schema", self.schema.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvImportParams {
    pub delimiter: char,
    pub has_header: bool,
}

impl Default for CsvImportParams {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl ParameterSchema for CsvImportParams {
    fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("delimiter", self.delimiter.to_string()),
            ("hasHeader", self.has_header.to_string()),
        ]
    }
}

/// Declares the parameter union, mapping template ids to their schema.
macro_rules! define_parameter_schemas {
    ( $( ($variant:ident, $schema:ty, $( $template_id:literal )|+ ) ),* $(,)? ) => {
        /// The default parameters of a template, keyed by template id.
        /// Unknown ids fall back to [`TemplateParameters::Generic`], which has no entries.
        #[derive(Debug, Clone, PartialEq)]
        pub enum TemplateParameters {
            $( $variant($schema), )*
            Generic,
        }

        impl TemplateParameters {
            pub fn for_template(template_id: &str) -> Self {
                match template_id {
                    $( $( $template_id )|+ => TemplateParameters::$variant(<$schema>::default()), )*
                    _ => TemplateParameters::Generic,
                }
            }

            pub fn entries(&self) -> Vec<(&'static str, String)> {
                match self {
                    $( TemplateParameters::$variant(schema) => schema.entries(), )*
                    TemplateParameters::Generic => Vec::new(),
                }
            }
        }
    };
}

define_parameter_schemas! {
    (DemandForecasting, DemandForecastingParams, "demand-forecasting"),
    (InventoryOptimization, InventoryOptimizationParams, "inventory-optimization"),
    (ProductionScheduling, ProductionSchedulingParams, "production-scheduling"),
    (AssortmentPlanning, AssortmentPlanningParams, "assortment-planning"),
    (RawMaterialPlanning, RawMaterialPlanningParams, "raw-material-planning"),
    (ProjectPrioritization, ProjectPrioritizationParams, "project-prioritization"),
    (Agent, AgentParams,
        "forecast-analyst-agent"
            | "anomaly-detection-agent"
            | "replenishment-agent"
            | "scenario-planner-agent"),
    (ErpConnector, ErpConnectorParams, "sap-erp"),
    (WarehouseConnector, WarehouseConnectorParams, "snowflake" | "sales-forecast-feed"),
    (CsvImport, CsvImportParams, "csv-import"),
}

impl TemplateParameters {
    pub fn into_parameters(self) -> Parameters {
        self.entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// The default-parameter lookup consulted when a template is dropped.
///
/// Overrides registered with [`ParameterDefaults::with_override`] take precedence
/// over the built-in typed schemas.
#[derive(Debug, Clone, Default)]
pub struct ParameterDefaults {
    overrides: AHashMap<String, Parameters>,
}

impl ParameterDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, template_id: &str, parameters: Parameters) -> Self {
        self.overrides.insert(template_id.to_string(), parameters);
        self
    }

    pub fn lookup(&self, template_id: &str) -> Parameters {
        match self.overrides.get(template_id) {
            Some(parameters) => parameters.clone(),
            None => default_parameters(template_id),
        }
    }
}

/// Built-in defaults for `template_id`; empty for unknown ids.
pub fn default_parameters(template_id: &str) -> Parameters {
    TemplateParameters::for_template(template_id).into_parameters()
}

use super::template::{Catalog, PaletteItem};

/// The built-in functional modules.
pub fn functional_modules() -> Vec<PaletteItem> {
    use Catalog::FunctionalModules as C;
    vec![
        PaletteItem::new(
            "demand-forecasting",
            "Demand Forecasting",
            "trending-up",
            "#3b82f6",
            C,
            "Planning",
        )
        .with_description("Statistical and ML demand forecast per SKU and location"),
        PaletteItem::new(
            "inventory-optimization",
            "Inventory Optimization",
            "package",
            "#10b981",
            C,
            "Planning",
        )
        .with_description("Safety stock and reorder point optimisation"),
        PaletteItem::new(
            "production-scheduling",
            "Production Scheduling",
            "calendar-clock",
            "#f59e0b",
            C,
            "Operations",
        )
        .with_description("Finite-capacity line scheduling"),
        PaletteItem::new(
            "assortment-planning",
            "Assortment Planning",
            "layout-grid",
            "#8b5cf6",
            C,
            "Merchandising",
        )
        .with_description("Store-cluster assortment selection under shelf constraints"),
        PaletteItem::new(
            "raw-material-planning",
            "Raw Material Planning",
            "boxes",
            "#ef4444",
            C,
            "Operations",
        )
        .with_description("Material requirements derived from the production plan"),
        PaletteItem::new(
            "project-prioritization",
            "Project Prioritization",
            "list-ordered",
            "#14b8a6",
            C,
            "Portfolio",
        )
        .with_description("Scores and ranks improvement projects against a budget"),
        PaletteItem::new(
            "supply-planning",
            "Supply Planning",
            "truck",
            "#6366f1",
            C,
            "Planning",
        ),
    ]
}

/// The built-in intelligent agents.
pub fn intelligent_agents() -> Vec<PaletteItem> {
    use Catalog::IntelligentAgents as C;
    vec![
        PaletteItem::new(
            "forecast-analyst-agent",
            "Forecast Analyst Agent",
            "bot",
            "#0ea5e9",
            C,
            "Analysis",
        )
        .with_description("Explains forecast drivers and flags bias"),
        PaletteItem::new(
            "anomaly-detection-agent",
            "Anomaly Detection Agent",
            "radar",
            "#f43f5e",
            C,
            "Analysis",
        )
        .with_description("Watches sales and inventory streams for outliers"),
        PaletteItem::new(
            "replenishment-agent",
            "Replenishment Agent",
            "refresh-cw",
            "#22c55e",
            C,
            "Execution",
        )
        .with_description("Proposes purchase orders from the inventory plan"),
        PaletteItem::new(
            "scenario-planner-agent",
            "Scenario Planner Agent",
            "git-branch",
            "#a855f7",
            C,
            "Analysis",
        ),
    ]
}

/// The built-in data connectors.
pub fn data_connectors() -> Vec<PaletteItem> {
    use Catalog::DataConnectors as C;
    vec![
        PaletteItem::new(
            "sap-erp",
            "SAP ERP",
            "database",
            "#0f766e",
            C,
            "ERP",
        )
        .with_description("Reads orders, stock and master data from SAP"),
        PaletteItem::new(
            "snowflake",
            "Snowflake Warehouse",
            "snowflake",
            "#38bdf8",
            C,
            "Warehouse",
        ),
        PaletteItem::new(
            "csv-import",
            "CSV Import",
            "file-spreadsheet",
            "#64748b",
            C,
            "Files",
        )
        .with_description("Uploads a delimited file as a data source"),
        PaletteItem::new(
            "sales-forecast-feed",
            "Sales Forecast Feed",
            "rss",
            "#eab308",
            C,
            "Warehouse",
        )
        .with_description("Consensus forecast published by the sales team"),
        PaletteItem::new(
            "rest-api",
            "REST API",
            "globe",
            "#94a3b8",
            C,
            "Integration",
        ),
    ]
}

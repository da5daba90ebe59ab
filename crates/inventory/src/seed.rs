//! Fixed startup catalog: 11 items across the T45/T50/T51 lines.

use drilltrack_core::ToolId;

use crate::item::{ToolCategory, ToolItem, ToolModel};

fn item(
    id: &str,
    name: &str,
    model: ToolModel,
    category: ToolCategory,
    stock: i64,
    min_stock: i64,
) -> ToolItem {
    ToolItem {
        id: ToolId::new(id),
        name: name.to_string(),
        model,
        category,
        stock,
        min_stock,
    }
}

/// The initial inventory loaded once at startup.
pub fn initial_inventory() -> Vec<ToolItem> {
    use ToolCategory::{Bit, Handle, Rod};
    use ToolModel::{T45, T50, T51};

    vec![
        // T51
        item("t51-p", "Punho T51", T51, Handle, 15, 5),
        item("t51-h", "Haste T51", T51, Rod, 25, 8),
        item("t51-b35", "Bit 3,5'' T51", T51, Bit, 40, 10),
        item("t51-b45", "Bit 4,5'' T51", T51, Bit, 35, 10),
        // T50
        item("t50-p", "Punho T50", T50, Handle, 12, 4),
        item("t50-h", "Haste T50", T50, Rod, 20, 6),
        item("t50-b45", "Bit 4,5'' T50", T50, Bit, 30, 8),
        // T45
        item("t45-p", "Punho T45", T45, Handle, 18, 5),
        item("t45-h", "Haste T45", T45, Rod, 30, 10),
        item("t45-b35", "Bit 3,5'' T45", T45, Bit, 45, 15),
        item("t45-b45", "Bit 4,5'' T45", T45, Bit, 38, 12),
    ]
}

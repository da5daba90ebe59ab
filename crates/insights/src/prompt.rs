//! Prompt assembly for the stock-analysis request.

use drilltrack_inventory::InventoryState;

/// Withdrawals included in the prompt, newest first.
const RECENT_WITHDRAWALS: usize = 10;

/// Build the analysis prompt from a state snapshot.
///
/// Fixed instructional preamble, one line per catalog item, then the most
/// recent withdrawals. The 150-word cap is a prompt instruction only; the
/// response length is not enforced programmatically.
pub fn build_prompt(state: &InventoryState) -> String {
    let inventory_summary = state
        .inventory
        .iter()
        .map(|i| format!("{}: {} em estoque (mínimo {})", i.name, i.stock, i.min_stock))
        .collect::<Vec<_>>()
        .join("\n");

    let recent_withdrawals = state
        .withdrawals
        .iter()
        .take(RECENT_WITHDRAWALS)
        .map(|w| {
            format!(
                "{}x {} em {} por {}",
                w.quantity,
                w.tool_name,
                w.date.to_rfc3339(),
                w.reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Como um consultor especialista em perfuração de rochas, analise o seguinte estoque:\n\
         \n\
         ESTOQUE ATUAL:\n\
         {inventory_summary}\n\
         \n\
         RETIRADAS RECENTES:\n\
         {recent_withdrawals}\n\
         \n\
         Por favor, forneça uma análise curta (máximo 150 palavras) em Português sobre:\n\
         1. Quais ferramentas estão em nível crítico.\n\
         2. Padrões de consumo anormais detectados.\n\
         3. Recomendações para o próximo pedido de compra."
    )
}

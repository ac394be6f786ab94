//! Shipping methods command.

use anyhow::Result;

use crate::context::Context;

/// Run the shipping command.
pub fn run(ctx: &Context) -> Result<()> {
    let calculator = ctx.calculator()?;
    let methods = calculator.shipping_methods();

    if ctx.output.is_json() {
        ctx.output.json(&methods);
        return Ok(());
    }

    ctx.output.header("Shipping methods");
    let widths = [10, 20, 8, 18];
    ctx.output.table_header(&["ID", "NAME", "FEE", "DELIVERY"], &widths);
    for method in methods {
        let fee = method.fee.display();
        ctx.output.table_row(
            &[method.id.as_str(), &method.name, &fee, &method.delivery_time],
            &widths,
        );
    }
    Ok(())
}

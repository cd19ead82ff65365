//! Payment form section.

use garage_commerce::checkout::{FieldConstraint, FormField, PaymentForm};

use super::html_escape;
use crate::messages::Messages;

/// Render the payment form with its declared constraints as HTML attributes.
pub fn render_payment_form(form: &PaymentForm, messages: &Messages) -> String {
    let fields: String = form
        .fields()
        .iter()
        .map(|field| render_field(field, messages))
        .collect();

    format!(
        r#"<section class="payment-form" data-section="payment">
    <h5>{}</h5>
    <form id="paymentForm">
{}
        <button type="submit" id="processPaymentBtn">{}</button>
    </form>
</section>"#,
        html_escape(messages.payment_title),
        fields,
        html_escape(messages.pay),
    )
}

fn render_field(field: &FormField, messages: &Messages) -> String {
    let attrs: String = field
        .constraints
        .iter()
        .map(|constraint| match constraint {
            FieldConstraint::Required => " required".to_string(),
            FieldConstraint::MinLength(min) => format!(r#" minlength="{min}""#),
            FieldConstraint::Digits { min, max } => {
                format!(r#" inputmode="numeric" pattern="[0-9 ]+" data-digits="{min}-{max}""#)
            }
            FieldConstraint::MonthYear => r#" pattern="(0[1-9]|1[0-2])/[0-9]{2}""#.to_string(),
        })
        .collect();

    let label = messages.field_label(field.name);
    format!(
        r#"        <label for="{name}">{label}</label>
        <input id="{name}" name="{name}" value="{value}"{attrs}>
"#,
        name = field.name,
        label = html_escape(label),
        value = html_escape(&field.value),
        attrs = attrs,
    )
}

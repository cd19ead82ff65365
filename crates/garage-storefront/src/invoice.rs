//! Invoice documents: rendering and delivery.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use garage_commerce::checkout::InvoiceRecord;
use garage_commerce::Locale;
use tracing::info;

use crate::error::{Result, StorefrontError};
use crate::messages::Messages;
use crate::page::{HeadContent, Page};
use crate::sections::html_escape;

/// File extension of invoice documents.
pub const INVOICE_EXTENSION: &str = "html";

/// Render an invoice as a printable HTML document.
pub fn render_invoice(record: &InvoiceRecord, locale: Locale, messages: &Messages) -> String {
    let rows: String = record
        .lines
        .iter()
        .map(|line| {
            format!(
                "<tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                html_escape(&line.label()),
                html_escape(&line.subtotal.format(locale)),
            )
        })
        .collect();

    let body = format!(
        r#"<article class="invoice" data-invoice="{id}">
<h1>{title}</h1>
<p>{date_label}: {date}</p>
<p>{customer_label}: {customer}</p>
<h2>{details}</h2>
<table>
{rows}</table>
<p class="invoice-total"><strong>{total_label}: {total}</strong></p>
</article>"#,
        id = record.id,
        title = html_escape(messages.invoice_title),
        date_label = html_escape(messages.invoice_date),
        date = html_escape(&record.issued_on(locale)),
        customer_label = html_escape(messages.invoice_customer),
        customer = html_escape(&record.customer_name),
        details = html_escape(messages.invoice_details),
        rows = rows,
        total_label = html_escape(messages.invoice_total),
        total = html_escape(&record.total.format(locale)),
    );

    let head = HeadContent::new(messages.invoice_title).with_style(
        "body { font-family: sans-serif; margin: 2rem; } table { width: 100%; } \
         .amount { text-align: right; } @media print { body { margin: 0; } }",
    );
    let mut page = Page::new(locale.tag(), head);
    page.push(body);
    page.render()
}

/// A rendered invoice ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// File name including extension.
    pub file_name: String,
    /// HTML content.
    pub html: String,
}

/// Where invoice documents go.
pub trait InvoiceSink {
    /// Deliver a document. Returns where it ended up.
    fn deliver(&self, document: &InvoiceDocument) -> Result<String>;
}

/// Writes invoices into a directory.
#[derive(Debug, Clone)]
pub struct FileInvoiceSink {
    dir: PathBuf,
}

impl FileInvoiceSink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl InvoiceSink for FileInvoiceSink {
    fn deliver(&self, document: &InvoiceDocument) -> Result<String> {
        let path = self.dir.join(&document.file_name);
        std::fs::create_dir_all(&self.dir).map_err(|source| StorefrontError::InvoiceWrite {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, &document.html).map_err(|source| StorefrontError::InvoiceWrite {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "invoice written");
        Ok(path.display().to_string())
    }
}

/// Keeps invoices in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryInvoiceSink {
    documents: Arc<Mutex<Vec<InvoiceDocument>>>,
}

impl MemoryInvoiceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents delivered so far.
    pub fn documents(&self) -> Vec<InvoiceDocument> {
        self.documents.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl InvoiceSink for MemoryInvoiceSink {
    fn deliver(&self, document: &InvoiceDocument) -> Result<String> {
        if let Ok(mut documents) = self.documents.lock() {
            documents.push(document.clone());
        }
        Ok(format!("memory:{}", document.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ES_CL;
    use chrono::{FixedOffset, TimeZone};
    use garage_commerce::cart::Cart;
    use garage_commerce::catalog::Product;
    use garage_commerce::{Currency, Money};

    fn record() -> InvoiceRecord {
        let mut cart = Cart::new(Currency::CLP);
        let corolla = Product::new(1, "Toyota", "Corolla", "Sedan", Money::new(1_000_000, Currency::CLP));
        cart.add_item(&corolla, 2).unwrap();
        let issued_at = FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 11, 5, 10, 0, 0)
            .unwrap();
        InvoiceRecord::from_cart(&cart, "Ana <Pérez>", issued_at).unwrap()
    }

    #[test]
    fn test_render_invoice() {
        let html = render_invoice(&record(), Locale::EsCl, &ES_CL);

        assert!(html.contains("<h1>Factura de Compra - Garage Online</h1>"));
        assert!(html.contains("Fecha: 05-11-2024"));
        assert!(html.contains("Cliente: Ana &lt;Pérez&gt;"));
        assert!(html.contains("<td>Toyota Corolla (x2)</td>"));
        assert!(html.contains("Total a Pagar: $2.000.000"));
    }

    #[test]
    fn test_file_sink_writes_document() {
        let dir = std::env::temp_dir().join(format!("garage-invoices-{}", std::process::id()));
        let sink = FileInvoiceSink::new(&dir);
        let document = InvoiceDocument {
            file_name: "factura-garage-online-1.html".into(),
            html: "<html></html>".into(),
        };

        let location = sink.deliver(&document).unwrap();
        assert!(location.ends_with("factura-garage-online-1.html"));
        assert_eq!(std::fs::read_to_string(dir.join(&document.file_name)).unwrap(), "<html></html>");
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_memory_sink() {
        let sink = MemoryInvoiceSink::new();
        let document = InvoiceDocument {
            file_name: "a.html".into(),
            html: String::new(),
        };
        sink.deliver(&document).unwrap();
        assert_eq!(sink.documents(), vec![document]);
    }
}

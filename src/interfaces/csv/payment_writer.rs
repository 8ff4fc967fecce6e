use crate::domain::payment::Payment;
use crate::error::Result;
use std::io::Write;

/// Writes payments as CSV rows with an `employee_id,amount` header.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    /// Creates a new `PaymentWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    /// Writes every payment in order and flushes the sink.
    ///
    /// The header is written even when there are no payments.
    pub fn write_payments<'a>(
        &mut self,
        payments: impl IntoIterator<Item = &'a Payment>,
    ) -> Result<()> {
        self.writer.write_record(["employee_id", "amount"])?;
        for payment in payments {
            self.writer.serialize(payment)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

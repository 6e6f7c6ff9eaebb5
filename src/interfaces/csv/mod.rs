pub mod checkout_writer;
pub mod order_reader;

mod serial;

pub(crate) use serial::SerialController;

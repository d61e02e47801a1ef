mod descriptor_factory;
mod formatter_factory;

pub use descriptor_factory::DescriptorFactory;
pub use formatter_factory::FormatterFactory;

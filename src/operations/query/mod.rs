mod endpoint_grab;
mod is_valid;
mod section_at;
mod stripe_lines;
mod update_wire_info;

pub use endpoint_grab::EndpointGrab;
pub use is_valid::IsValid;
pub use section_at::SectionAt;
pub use stripe_lines::StripeLines;
pub use update_wire_info::UpdateWireInfo;

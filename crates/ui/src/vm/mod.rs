mod picker_vm;

pub use picker_vm::{PickerVm, TierOptionVm, map_picker};

mod picker;

pub use picker::PickerView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

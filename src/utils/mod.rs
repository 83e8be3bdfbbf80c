pub mod response_fields;

#[cfg(test)]
pub mod fake_upstream;

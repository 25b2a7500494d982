mod shorthand_tests;
mod type_reference_tests;

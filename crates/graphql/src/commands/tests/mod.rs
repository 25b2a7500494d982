mod add_field_tests;

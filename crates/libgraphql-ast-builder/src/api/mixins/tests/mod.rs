mod selection_set_mixin_tests;

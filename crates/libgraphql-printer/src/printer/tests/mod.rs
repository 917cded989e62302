mod printable_tests;

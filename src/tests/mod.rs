mod viability_tests;

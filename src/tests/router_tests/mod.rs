mod browse_tests;

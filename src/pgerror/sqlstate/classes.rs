// Known Postgres error classes
error_classes! {
    CLASS_SUCCESSFUL_COMPLETION = "00", "Successful Completion";
    CLASS_WARNING = "01", "Warning";
    CLASS_NO_DATA = "02", "No Data";
    CLASS_SQL_STATEMENT_NOT_YET_COMPLETE = "03", "SQL Statement Not Yet Complete";
    CLASS_CONNECTION_EXCEPTION = "08", "Connection Exception";
    CLASS_TRIGGERED_ACTION_EXCEPTION = "09", "Triggered Action Exception";
    CLASS_FEATURE_NOT_SUPPORTED = "0A", "Feature Not Supported";
    CLASS_INVALID_TRANSACTION_INITIATION = "0B", "Invalid Transaction Initiation";
    CLASS_LOCATOR_EXCEPTION = "0F", "Locator Exception";
    CLASS_INVALID_GRANTOR = "0L", "Invalid Grantor";
    CLASS_INVALID_ROLE_SPECIFICATION = "0P", "Invalid Role Specification";
    CLASS_DIAGNOSTICS_EXCEPTION = "0Z", "Diagnostics Exception";
    CLASS_CASE_NOT_FOUND = "20", "Case Not Found";
    CLASS_CARDINALITY_VIOLATION = "21", "Cardinality Violation";
    CLASS_DATA_EXCEPTION = "22", "Data Exception";
    CLASS_INTEGRITY_CONSTRAINT_VIOLATION = "23", "Integrity Constraint Violation";
    CLASS_INVALID_CURSOR_STATE = "24", "Invalid Cursor State";
    CLASS_INVALID_TRANSACTION_STATE = "25", "Invalid Transaction State";
    CLASS_INVALID_SQL_STATEMENT_NAME = "26", "Invalid SQL Statement Name";
    CLASS_TRIGGERED_DATA_CHANGE_VIOLATION = "27", "Triggered Data Change Violation";
    CLASS_INVALID_AUTHORIZATION_SPECIFICATION = "28", "Invalid Authorization Specification";
    CLASS_DEPENDENT_PRIVILEGE_DESCRIPTORS_STILL_EXIST = "2B", "Dependent Privilege Descriptors Still Exist";
    CLASS_INVALID_TRANSACTION_TERMINATION = "2D", "Invalid Transaction Termination";
    CLASS_SQL_ROUTINE_EXCEPTION = "2F", "SQL Routine Exception";
    CLASS_INVALID_CURSOR_NAME = "34", "Invalid Cursor Name";
    CLASS_EXTERNAL_ROUTINE_EXCEPTION = "38", "External Routine Exception";
    CLASS_EXTERNAL_ROUTINE_INVOCATION_EXCEPTION = "39", "External Routine Invocation Exception";
    CLASS_SAVEPOINT_EXCEPTION = "3B", "Savepoint Exception";
    CLASS_INVALID_CATALOG_NAME = "3D", "Invalid Catalog Name";
    CLASS_INVALID_SCHEMA_NAME = "3F", "Invalid Schema Name";
    CLASS_TRANSACTION_ROLLBACK = "40", "Transaction Rollback";
    CLASS_SYNTAX_ERROR_OR_ACCESS_RULE_VIOLATION = "42", "Syntax Error or Access Rule Violation";
    CLASS_WITH_CHECK_OPTION_VIOLATION = "44", "WITH CHECK OPTION Violation";
    CLASS_INSUFFICIENT_RESOURCES = "53", "Insufficient Resources";
    CLASS_PROGRAM_LIMIT_EXCEEDED = "54", "Program Limit Exceeded";
    CLASS_OBJECT_NOT_IN_PREREQUISITE_STATE = "55", "Object Not In Prerequisite State";
    CLASS_OPERATOR_INTERVENTION = "57", "Operator Intervention";
    CLASS_SYSTEM_ERROR = "58", "System Error (errors external to PostgreSQL itself)";
    CLASS_SNAPSHOT_TOO_OLD = "72", "Snapshot Failure";
    CLASS_CONFIG_FILE_ERROR = "F0", "Configuration File Error";
    CLASS_FDW_ERROR = "HV", "Foreign Data Wrapper Error (SQL/MED)";
    CLASS_PLPGSQL_ERROR = "P0", "PL/pgSQL Error";
    CLASS_INTERNAL_ERROR = "XX", "Internal Error";
}

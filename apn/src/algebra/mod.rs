/*!

The algebra registry: sorts, the operations and variables declared on them, and the rewrite rules attached to
them. See [`sort`], [`operation`], [`variable`], and [`rule`].

*/

pub mod operation;
pub mod rule;
pub mod sort;
pub mod variable;

pub use operation::Operation;
pub use rule::RewriteRule;
pub use sort::Sort;
pub use variable::Variable;

pub mod my_nom;

//! HTML fixtures shaped like the BROU rate board.

/// A board whose first row quotes `buy` and `sell`, followed by a second
/// currency row that must be ignored.
pub fn brou_page(buy: &str, sell: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="portlet-body">
    <table>
      <thead>
        <tr><th>Moneda</th><th>Compra</th><th></th><th>Venta</th></tr>
      </thead>
      <tbody>
        <tr>
          <td><p class="moneda">Dólar</p></td>
          <td><div><p class="valor">
            {buy}
          </p></div></td>
          <td><div><p></p></div></td>
          <td><div><p class="valor"> {sell} </p></div></td>
        </tr>
        <tr>
          <td><p class="moneda">Euro</p></td>
          <td><div><p class="valor">45,90</p></div></td>
          <td><div><p></p></div></td>
          <td><div><p class="valor">48,60</p></div></td>
        </tr>
      </tbody>
    </table>
  </div>
</body>
</html>"#
    )
}

/// A page after a redesign: no rate table at all.
pub fn redesigned_page() -> String {
    r#"<html><body><main><h1>Cotizaciones</h1><ul><li>Dólar 41,10</li></ul></main></body></html>"#
        .to_string()
}
